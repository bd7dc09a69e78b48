use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nexus_blocking_container_rs::{BlockingContainer, ContainerMode};

fn offer_take(c: &mut Criterion) {
  let mut group = c.benchmark_group("offer_take");
  for mode in [ContainerMode::Fifo, ContainerMode::Lifo] {
    group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
      let container = BlockingContainer::new(mode);
      b.iter(|| {
        for i in 0..1024_u64 {
          container.offer(i);
        }
        for _ in 0..1024 {
          black_box(container.take());
        }
      });
    });
  }
  group.finish();
}

fn hand_off(c: &mut Criterion) {
  c.bench_function("hand_off_single_producer", |b| {
    b.iter(|| {
      let container = BlockingContainer::fifo();
      let producer = {
        let container = container.clone();
        thread::spawn(move || {
          for i in 0..1024_u64 {
            container.offer(i);
          }
        })
      };
      for _ in 0..1024 {
        black_box(container.take());
      }
      producer.join().unwrap();
    });
  });
}

criterion_group!(benches, offer_take, hand_off);
criterion_main!(benches);
