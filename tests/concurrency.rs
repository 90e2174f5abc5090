//! Concurrent first-time conversions converge on a single cached plan.

mod common;

use std::sync::{Arc, Barrier};
use std::thread;

use common::*;
use fieldmap::{Mapper, TypePair};

const THREADS: usize = 16;

#[test]
fn concurrent_first_requests_share_one_entry() {
    let mapper = Mapper::new();
    let barrier = Barrier::new(THREADS);
    let order = sample_order();

    let results: Vec<OrderDto> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    mapper.map::<Order, OrderDto>(&order)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("mapping thread panicked").unwrap())
            .collect()
    });

    let expected = OrderDto {
        order_id: 1,
        order_name: "OrderName".to_string(),
        order_date: order_date(),
    };
    assert!(results.iter().all(|dto| *dto == expected));

    assert_eq!(mapper.cache().len(), 1);
    assert!(mapper.cache().contains(&TypePair::of::<Order, OrderDto>()));

    let stats = mapper.stats();
    assert!(stats.compilations >= 1);
    assert_eq!(stats.compilations, 1 + stats.discarded);
    assert_eq!(stats.hits + stats.misses, THREADS as u64);
}

#[test]
fn racing_callers_end_up_with_the_installed_plan() {
    let mapper = Mapper::new();
    let barrier = Barrier::new(THREADS);

    let plans: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    mapper.plan::<Order, OrderWithNote>().unwrap()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("plan thread panicked"))
            .collect()
    });

    let installed = mapper
        .cache()
        .get(&TypePair::of::<Order, OrderWithNote>())
        .unwrap();
    assert!(plans.iter().all(|plan| Arc::ptr_eq(plan, &installed)));
}

#[test]
fn distinct_pairs_populate_concurrently() {
    let mapper = Arc::new(Mapper::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let mapper = Arc::clone(&mapper);
            thread::spawn(move || {
                let order = Order {
                    order_id: i as i32,
                    ..sample_order()
                };
                for _ in 0..50 {
                    let dto: OrderDto = mapper.map(&order).unwrap();
                    assert_eq!(dto.order_id, i as i32);
                    let noted: OrderWithNote = mapper.map(&order).unwrap();
                    assert_eq!(noted.note, "");
                    let wide: WideOrder = mapper.map(&order).unwrap();
                    assert_eq!(wide.order_id, 0);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(mapper.cache().len(), 3);
    let stats = mapper.stats();
    assert_eq!(stats.entries, 3);
    assert_eq!(stats.compilations, 3 + stats.discarded);
    assert_eq!(stats.hits + stats.misses, (THREADS * 50 * 3) as u64);
}
