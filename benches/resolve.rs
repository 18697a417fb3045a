use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use herald::{
    Handler, HandlerChain, HandlerSet, MessageKind, PlatformConfig, Viewer, ViewerId,
    ViewerRegistry, ViewerShape,
};
use herald_proto::Message;
use std::any::Any;
use std::sync::Arc;
use uuid::Uuid;

// Baseline benchmarks for the hot dispatch path: cached resolution and
// broadcast fan-out through a no-op handler.

struct BenchViewer(ViewerId);

impl Viewer for BenchViewer {
    fn id(&self) -> ViewerId {
        self.0
    }

    fn shape(&self) -> ViewerShape {
        ViewerShape::Player
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct NullHandler;

impl Handler<Message> for NullHandler {
    fn name(&self) -> &'static str {
        "null"
    }

    fn applies_to(&self, _shape: ViewerShape) -> bool {
        true
    }

    fn deliver(&self, _viewer: &dyn Viewer, _payload: &Message) {}
}

fn resolution_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");
    group.throughput(Throughput::Elements(1));

    let handlers: Vec<Arc<dyn Handler<Message>>> = vec![Arc::new(NullHandler)];
    let chain = HandlerChain::new(MessageKind::Chat, handlers);
    let viewer = BenchViewer(ViewerId::Player(Uuid::new_v4()));
    let message = Message::text("hello world");
    // Warm the shape cache so the benchmark measures the steady state.
    chain.deliver(&viewer, &message);

    group.bench_function("resolve_cached", |b| b.iter(|| chain.resolve(ViewerShape::Player)));

    group.bench_function("deliver_cached", |b| b.iter(|| chain.deliver(&viewer, &message)));

    group.finish();
}

fn broadcast_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");
    group.throughput(Throughput::Elements(100));

    let handlers: Vec<Arc<dyn Handler<Message>>> = vec![Arc::new(NullHandler)];
    let registry = ViewerRegistry::new(
        PlatformConfig::default(),
        HandlerSet {
            chat: handlers,
            ..Default::default()
        },
    );
    for _ in 0..100 {
        registry.on_connect(Arc::new(BenchViewer(ViewerId::Player(Uuid::new_v4()))));
    }
    let message = Message::text("hello world");

    group.bench_function("chat_100_viewers", |b| b.iter(|| registry.broadcast_chat(&message)));

    group.finish();
}

criterion_group!(benches, resolution_benchmark, broadcast_benchmark);
criterion_main!(benches);
