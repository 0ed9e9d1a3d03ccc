//! Tests for the seeded generator: cardinalities, FK ranges and id sequencing.

use std::collections::HashSet;
use store_seed::{Dataset, Generator, SamplerStrategy, VolumeConfig};

fn config(customers: usize, products: usize, orders: usize, max_lines: usize) -> VolumeConfig {
    VolumeConfig {
        customers,
        products,
        orders,
        max_lines_per_order: max_lines,
        seed: Some(42),
        ..Default::default()
    }
}

fn generate(config: VolumeConfig) -> Dataset {
    Generator::new(config).unwrap().generate().unwrap()
}

#[test]
fn test_small_scenario() {
    let data = generate(config(2, 3, 1, 3));

    assert_eq!(
        data.customers.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(
        data.products.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(data.orders.len(), 1);
    assert_eq!(data.orders[0].id, 1);
    assert!([1, 2].contains(&data.orders[0].customer_id));

    let lines = &data.order_lines;
    assert!((1..=3).contains(&lines.len()));
    let ids: Vec<i64> = lines.iter().map(|l| l.id).collect();
    assert_eq!(ids, (1..=lines.len() as i64).collect::<Vec<_>>());

    let products: HashSet<i64> = lines.iter().map(|l| l.product_id).collect();
    assert_eq!(products.len(), lines.len());
    assert!(products.iter().all(|p| (1..=3).contains(p)));
    assert!(lines.iter().all(|l| l.order_id == 1));
}

#[test]
fn test_ids_contiguous() {
    let data = generate(config(25, 40, 60, 4));

    for (i, c) in data.customers.iter().enumerate() {
        assert_eq!(c.id, i as i64 + 1);
    }
    for (i, p) in data.products.iter().enumerate() {
        assert_eq!(p.id, i as i64 + 1);
    }
    for (i, o) in data.orders.iter().enumerate() {
        assert_eq!(o.id, i as i64 + 1);
    }
    assert_eq!(data.customers.len(), 25);
    assert_eq!(data.products.len(), 40);
    assert_eq!(data.orders.len(), 60);
}

#[test]
fn test_order_lines_grouped_and_sequential() {
    let data = generate(config(10, 20, 200, 5));

    let mut expected_id = 1;
    let mut previous_order = 0;
    for line in &data.order_lines {
        assert_eq!(line.id, expected_id);
        assert!(line.order_id >= previous_order);
        expected_id += 1;
        previous_order = line.order_id;
    }

    let per_order_total: usize = data
        .orders
        .iter()
        .map(|o| data.lines_for_order(o.id).count())
        .sum();
    assert_eq!(per_order_total, data.order_lines.len());
}

#[test]
fn test_lines_per_order_within_bounds_and_distinct() {
    for strategy in [SamplerStrategy::Rejection, SamplerStrategy::Shuffle] {
        let data = generate(VolumeConfig {
            strategy,
            ..config(10, 6, 300, 6)
        });

        for order in &data.orders {
            let products: Vec<i64> = data.lines_for_order(order.id).map(|l| l.product_id).collect();
            assert!(
                (1..=6).contains(&products.len()),
                "order {} has {} lines",
                order.id,
                products.len()
            );
            let unique: HashSet<i64> = products.iter().copied().collect();
            assert_eq!(unique.len(), products.len(), "order {}", order.id);
        }
    }
}

#[test]
fn test_value_ranges() {
    let data = generate(config(50, 100, 500, 3));

    for order in &data.orders {
        assert!((1..=50).contains(&order.customer_id));
    }
    for line in &data.order_lines {
        assert!((1..=5).contains(&line.quantity));
        assert!((1_000..=11_000).contains(&line.price.cents()));
        let text = line.price.to_string();
        let (_, decimals) = text.split_once('.').unwrap();
        assert_eq!(decimals.len(), 2);
    }
}

#[test]
fn test_skus_unique_and_non_empty() {
    let data = generate(config(1, 1_000, 0, 1));

    let skus: HashSet<&str> = data.products.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(skus.len(), 1_000);
    assert!(data.products.iter().all(|p| !p.sku.is_empty()));
}

#[test]
fn test_same_seed_same_data() {
    let a = generate(config(20, 30, 50, 3));
    let b = generate(config(20, 30, 50, 3));
    assert_eq!(a, b);
}

#[test]
fn test_different_seed_same_shape() {
    let a = generate(config(20, 30, 50, 3));
    let b = generate(VolumeConfig {
        seed: Some(7),
        ..config(20, 30, 50, 3)
    });

    assert_ne!(a, b);
    assert_eq!(a.customers.len(), b.customers.len());
    assert_eq!(a.products.len(), b.products.len());
    assert_eq!(a.orders.len(), b.orders.len());
    assert!(b.order_lines.len() >= b.orders.len());
}

#[test]
fn test_max_lines_equal_to_products() {
    // Every order may take the whole catalogue.
    let data = generate(config(3, 4, 100, 4));
    for order in &data.orders {
        let count = data.lines_for_order(order.id).count();
        assert!((1..=4).contains(&count));
    }
}

#[test]
fn test_invalid_config_rejected() {
    let err = Generator::new(config(2, 2, 5, 3)).err().unwrap();
    assert!(err.to_string().contains("max_lines_per_order"));
}

#[test]
fn test_random_seed_replays() {
    let mut gen = Generator::new(VolumeConfig {
        seed: None,
        ..config(5, 5, 5, 2)
    })
    .unwrap();
    let first = gen.generate().unwrap();

    let replay = generate(VolumeConfig {
        seed: Some(gen.seed()),
        ..config(5, 5, 5, 2)
    });
    assert_eq!(first, replay);
}
