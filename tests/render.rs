use shortcode::render::Registry;

fn registry() -> Registry {
    Registry::new()
        .self_closing("year", |_| "2024".to_string())
        .self_closing("link", |s| {
            format!(
                "<a href=\"{}\">{}</a>",
                s.value("href").unwrap_or("#"),
                s.positional_value(0).unwrap_or_default(),
            )
        })
        .enclosing("upper", |s| {
            s.content().unwrap_or_default().to_uppercase()
        })
}

#[test]
fn document() {
    let src = "Copyright [year]. See [link docs href=\"/docs\"] or [upper]shout[/upper].";
    assert_eq!(
        registry().render(src),
        "Copyright 2024. See <a href=\"/docs\">docs</a> or SHOUT.",
    );
}

#[test]
fn push_appends() {
    let mut out = String::from("> ");
    registry().push("[year]", &mut out);
    assert_eq!(out, "> 2024");
}

#[test]
fn malformed_kept() {
    let src = "[upper]a [year] b[/upper] [link 'x]";
    assert_eq!(registry().render(src), "[upper]a 2024 b[/upper] [link 'x]");
}

#[test]
fn content_not_rescanned() {
    let inner = registry();
    let outer = Registry::new().enclosing("box", move |s| {
        format!("<div>{}</div>", inner.render(s.content().unwrap_or_default()))
    });
    // content is not scanned, the inner shortcode breaks the outer one
    assert_eq!(outer.render("[box]it is [year][/box]"), "[box]it is [year][/box]");
    assert_eq!(outer.render("[box]it is (year)[/box]"), "<div>it is (year)</div>");
}

#[test]
fn shared_across_threads() {
    let registry = &registry();
    let inputs = ["[year]", "[upper]x[/upper]", "plain", "[link a]"];
    let outputs = std::thread::scope(|s| {
        let handles = inputs
            .iter()
            .map(|src| s.spawn(move || registry.render(src)))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    });
    assert_eq!(
        outputs,
        &["2024", "X", "plain", "<a href=\"#\">a</a>"],
    );
}
