use std::hint::black_box;

use bfx_postonly::{OrderRequest, check_order};
use criterion::{Criterion, criterion_group, criterion_main};
use rust_decimal_macros::dec;

fn bench_check_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_order");

    let accepted = OrderRequest::post_only_limit("tBTCUSD", dec!(0.001), dec!(30000));
    group.bench_function("accepted", |b| {
        b.iter(|| check_order(black_box(&accepted)));
    });

    let no_flags = OrderRequest::builder()
        .order_type("EXCHANGE LIMIT")
        .symbol("tBTCUSD")
        .amount(dec!(0.001))
        .price(dec!(30000))
        .build();
    group.bench_function("rejected_post_only", |b| {
        b.iter(|| check_order(black_box(&no_flags)));
    });

    let market = OrderRequest::builder()
        .order_type("EXCHANGE MARKET")
        .symbol("tBTCUSD")
        .amount(dec!(0.001))
        .build();
    group.bench_function("rejected_order_type", |b| {
        b.iter(|| check_order(black_box(&market)));
    });

    group.finish();
}

criterion_group!(benches, bench_check_order);
criterion_main!(benches);
