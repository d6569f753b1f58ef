use normalform::{normalize_1nf, KeyPolicy, Normalizer};
use normalform_cli::{
    input::load_relation,
    prompt::Prompter,
    render::{render, Format},
};
use std::path::Path;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn test_load_and_normalize() {
    let relation = load_relation(&fixture("student.json")).unwrap();
    let relations = normalize_1nf(relation).unwrap();

    let names: Vec<&str> = relations.iter().map(|r| r.name()).collect();
    assert_eq!(vec!["Student_Courses", "Student_Phones", "Student"], names);

    assert_eq!(3, relations[0].data().len());
    assert_eq!(3, relations[1].data().len());
    assert_eq!(&vec!["ID", "Phones"], relations[1].attributes());
    assert_eq!(&vec!["ID", "Courses", "Phones"], relations[1].primary_key());
    assert_eq!(
        &vec![vec!["1", "Alice"], vec!["2", "Bob"]],
        relations[2].data()
    );
}

#[test]
fn test_load_missing_file() {
    let error = load_relation(&fixture("missing.json")).unwrap_err();
    assert!(error.to_string().starts_with("failed to read relation from"));
}

#[test]
fn test_prompt_normalize_render() {
    let input = "R\n3\nK\nA\nB\n2\nA\nB\n1\nK\n2\n1\n{a1, a2}\n{b1}\n2\n{a3}\n{b2, b3}\n";
    let mut prompter = Prompter::new(input.as_bytes(), Vec::new());
    let relation = prompter.read_relation().unwrap();

    let relations = Normalizer::new()
        .with_key_policy(KeyPolicy::PerAttribute)
        .normalize_1nf(relation)
        .unwrap();
    assert_eq!(&vec!["K", "B"], relations[1].primary_key());
    assert_eq!(&vec!["K"], relations[2].primary_key());

    let mut output = Vec::new();
    render(&mut output, Some("NORMALIZE 1NF"), &relations, Format::Plain).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with("\nNORMALIZE 1NF\n\n------R_A-------\n"));
    assert!(output.contains("------R_B-------"));
    assert!(output.ends_with(&format!("------R-------\n{:<25}\n{:<25}\n{:<25}\n", "K", "1", "2")));
}
