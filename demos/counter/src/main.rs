//! The counter: one state cell rendered as a live document.

use anyhow::Result;
use ripple::dom::DomEvent;
use ripple::prelude::*;
use tracing_subscriber::EnvFilter;

struct Counter;

impl View for Counter {
    fn body(self, env: &Environment) -> impl View {
        let count = env.state(0i32);
        let clicks = count.clone();
        div((
            h1("ripple counter"),
            p(format!("clicked {} times", count.get())).id("status"),
            button("more")
                .id("more")
                .style(Style::new().padding("0.5rem 1rem")),
        ))
        .class("counter")
        .modifier(On::new("click", move |_| clicks.update(|n| *n += 1)))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::new(|| Counter).title("counter").launch();
    println!("initial:\n{}\n", app.html());

    for _ in 0..3 {
        app.dispatch_by_id("more", &DomEvent::new("click"));
    }
    println!("after three clicks:\n{}\n", app.html());

    app.validate()?;
    tracing::info!(passes = app.renderer().passes(), "done");
    Ok(())
}
