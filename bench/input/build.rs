use std::io::Write;

fn main() {
    let mut inputs = std::fs::read_dir(".")
        .unwrap()
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let name = entry.file_name().to_str()?.strip_suffix(".txt")?.to_string();
            if !entry.file_type().map_or(false, |ty| ty.is_file()) {
                return None;
            }
            let input = std::fs::read_to_string(entry.path()).ok()?;
            Some((name, input))
        })
        .collect::<Vec<_>>();
    inputs.sort();

    let out_dir = std::env::var_os("OUT_DIR").unwrap();
    let mut out = std::fs::File::create(std::path::Path::new(&out_dir).join("lib.rs")).unwrap();

    for (name, input) in &inputs {
        writeln!(
            out,
            "#[allow(dead_code)]\nconst {}: &str = r###\"{}\"###;",
            name.to_uppercase(),
            input,
        )
        .unwrap();
    }

    // shortcode names that the inputs use with an end tag
    writeln!(
        out,
        "pub const ENCLOSING: &[&str] = &[\"quote\", \"code\", \"box\"];",
    )
    .unwrap();

    writeln!(
        out,
        "#[allow(dead_code)]\npub const ALL: &str = r###\"{}\"###;",
        inputs.iter().map(|(_, s)| s.as_str()).collect::<String>(),
    )
    .unwrap();

    writeln!(
        out,
        "pub const INPUTS: &[(&str, &str)] = &[{}];",
        inputs
            .iter()
            .map(|(n, _)| n.as_ref())
            .chain(std::iter::once("all"))
            .map(|n| format!("(\"{}\", {}),", n, n.to_uppercase()))
            .collect::<String>(),
    )
    .unwrap();

    for (name, _) in &inputs {
        println!("cargo:rerun-if-changed={}.txt", name);
    }
}
