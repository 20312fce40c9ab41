use shortcode::Error;
use shortcode::ErrorKind;
use shortcode::ErrorKind::*;
use shortcode::Shortcode;

macro_rules! test_attr {
    ($src:expr, [$($exp:expr),* $(,)?] $(,)?) => {
        #[allow(unused)]
        let s = $src.parse::<Shortcode>().unwrap();
        let actual = s.attributes().iter().collect::<Vec<_>>();
        let expected: &[(&str, &str)] = &[$($exp),*];
        assert_eq!(actual, expected, "\n\n{}\n\n", $src);
    };
}

fn err(src: &str) -> (ErrorKind, usize) {
    let e: Error = src.parse::<Shortcode>().unwrap_err();
    (e.kind, e.offset)
}

#[test]
fn empty() {
    test_attr!("[a]", []);
    test_attr!("[a    ]", []);
}

#[test]
fn positional() {
    test_attr!("[a x y z]", [("$0", "x"), ("$1", "y"), ("$2", "z")]);
    test_attr!(r#"[a "x y" 'z']"#, [("$0", "x y"), ("$1", "z")]);
}

#[test]
fn named_lowercased() {
    test_attr!("[a Width=10 HEIGHT=20]", [("width", "10"), ("height", "20")]);
    test_attr!("[a w=Mixed]", [("w", "Mixed")]);
}

#[test]
fn quoting() {
    test_attr!(r#"[a t="it's"]"#, [("t", "it's")]);
    test_attr!(r#"[a t='say "hi"']"#, [("t", r#"say "hi""#)]);
    test_attr!(r#"[a t="a=b"]"#, [("t", "a=b")]);
    test_attr!(r#"[a t=""]"#, [("t", "")]);
}

#[test]
fn spaced_assignment() {
    test_attr!("[a k = v]", [("k", "v")]);
}

#[test]
fn escapes() {
    test_attr!(r"[a k=v\ w]", [("k", "v w")]);
    test_attr!(r#"[a k="say \"hi\"" 'c:\\dir']"#, [("k", r#"say "hi""#), ("$0", r"c:\dir")]);
    test_attr!(r"[a \$0]", [("$0", "$0")]);
}

#[test]
fn mixed_order() {
    test_attr!(
        "[a one k=v two l=w]",
        [("$0", "one"), ("k", "v"), ("$1", "two"), ("l", "w")],
    );
}

#[test]
fn lookup() {
    let s: Shortcode = "[a one K=v two]".parse().unwrap();
    assert_eq!(s.value("k"), Some("v"));
    assert_eq!(s.value("K"), Some("v"));
    assert_eq!(s.value("$1"), Some("two"));
    assert_eq!(s.positional_values().collect::<Vec<_>>(), &["one", "two"]);
    assert_eq!(s.attributes().len(), 3);
    assert!(!s.attributes().is_empty());
    assert_eq!(s.attributes().get("K"), None);
}

#[test]
fn errors() {
    assert_eq!(err("[a k=]"), (MissingAttributeValue { name: "k".to_string() }, 3));
    assert_eq!(err(r#"[a k="v]"#), (UnterminatedQuote { quote: '"' }, 5));
    assert_eq!(err(r#"[a k=v"]"#), (UnexpectedQuote { quote: '"' }, 6));
    assert_eq!(err("[a =v]"), (UnexpectedEquals, 3));
    assert_eq!(err("[a.b]"), (InvalidName("a.b".to_string()), 1));
    assert_eq!(err("[a y $0=x]"), (ReservedAttributeName("$0".to_string()), 5));
}
