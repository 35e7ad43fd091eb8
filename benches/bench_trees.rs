#[macro_use]
extern crate criterion;
extern crate balanced_trees;
extern crate rand;

use criterion::{black_box, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let elem = rng.next_u32();
        set.insert(elem);
        values.push(elem);
    }

    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for elem in &values {
                black_box(set.contains(elem));
            }
        })
    });
}

macro_rules! tree_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_trees::Tree;
                use balanced_trees::$module_name::$type_name;
                use criterion::{black_box, Criterion};
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;

                pub fn bench_add(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} add", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut tree = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            tree.add(rng.next_u32());
                        }
                    }));
                }

                pub fn bench_add_sorted(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} add sorted", stringify!($module_name)), |b| b.iter(|| {
                        let mut tree = $type_name::new();
                        for elem in 0..NUM_OF_OPERATIONS {
                            tree.add(elem);
                        }
                    }));
                }

                pub fn bench_contains(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let elem = rng.next_u32();
                        tree.add(elem);
                        values.push(elem);
                    }

                    c.bench_function(&format!("bench {} contains", stringify!($module_name)), move |b| b.iter(|| {
                        for elem in &values {
                            black_box(Tree::contains(&mut tree, elem));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_contains,
            bench_btreeset_insert,
            $(
                $module_name::bench_add,
                $module_name::bench_add_sorted,
                $module_name::bench_contains,
            )*
        );
    }
}

tree_benches!(
    avl_tree: AvlTree,
    red_black_tree: RedBlackTree,
    search_tree: SearchTree,
    splay_tree: SplayTree,
);

criterion_main!(benches);
