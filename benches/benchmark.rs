use criterion::{criterion_group, criterion_main, Criterion};
use sorted_int_list::{
    DelegationSortedIntList, InheritanceSortedIntList, IntList, SortedIntList,
};

fn fill<L: IntList + Default>() -> L {
    let mut list = L::default();
    for i in 0..1000 {
        list.add((i * 7919) % 1000);
    }
    list
}

fn sorted_int_list_bench(c: &mut Criterion) {
    c.bench_function("SortedIntList add", |b| b.iter(fill::<SortedIntList>));
    c.bench_function("DelegationSortedIntList add", |b| {
        b.iter(fill::<DelegationSortedIntList>)
    });
    c.bench_function("InheritanceSortedIntList add", |b| {
        b.iter(fill::<InheritanceSortedIntList>)
    });
}

fn add_all_bench(c: &mut Criterion) {
    let source: SortedIntList = fill();
    c.bench_function("DelegationSortedIntList add_all", |b| {
        b.iter(|| {
            let mut list = DelegationSortedIntList::new();
            list.add_all(&source);
            list
        })
    });
    c.bench_function("InheritanceSortedIntList add_all", |b| {
        b.iter(|| {
            let mut list = InheritanceSortedIntList::new();
            list.add_all(&source);
            list
        })
    });
}

criterion_group!(benches, sorted_int_list_bench, add_all_bench);
criterion_main!(benches);
