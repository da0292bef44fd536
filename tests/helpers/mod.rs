use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("streamer=trace".parse().unwrap()))
        .with_test_writer()
        .with_target(false)
        .compact()
        .try_init();

    if subscriber.is_err() {
        println!("Warning: tracing already initialized");
    }
}

/// 产生`items`并记录每个元素被拉取的次数。
pub fn counted<'a, T: Clone + 'a>(items: &'a [T], pulls: &'a std::cell::Cell<usize>) -> impl Iterator<Item = T> + 'a {
    items.iter().map(move |item| {
        pulls.set(pulls.get() + 1);
        item.clone()
    })
}
