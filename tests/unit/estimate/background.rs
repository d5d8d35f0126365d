use super::*;

const SVG_NS: &str = r#"xmlns="http://www.w3.org/2000/svg""#;

#[test]
fn single_path_uses_command_formula() {
    let svg = format!(r#"<svg {SVG_NS}><path d="M0 0 L10 10 L20 0 Z"/></svg>"#);
    assert_eq!(
        estimate_background(&svg).unwrap(),
        vec![PathEstimate { index: 0, length: 300 }]
    );
}

#[test]
fn bad_path_only_affects_itself() {
    let svg = format!(
        r#"<svg {SVG_NS}>
            <path d="M0 0 L1 1"/>
            <path/>
            <path d="M0 0 L oops"/>
            <path d="m0 0 c1 1 2 2 3 3 z"/>
        </svg>"#
    );
    let out = estimate_background(&svg).unwrap();
    let lengths: Vec<u32> = out.iter().map(|e| e.length).collect();
    assert_eq!(lengths, vec![200, 500, 500, 250]);
    let indices: Vec<usize> = out.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn no_paths_is_empty() {
    assert!(estimate_background("").unwrap().is_empty());
    assert!(
        estimate_background(&format!("<svg {SVG_NS}><circle r=\"3\"/></svg>"))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn malformed_document_is_an_error() {
    assert!(estimate_background("<svg><path></svg>").is_err());
}
