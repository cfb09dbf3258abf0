use aprovechamiento_inputs::{build_input_fragment, build_paired_cell, style_for, Sexo};

const IDS: &[&str] = &["A1", "0", "12345", "concepto-7", "x_y"];

#[test]
fn male_inputs_carry_male_label_class_and_id() {
    let male = style_for(Sexo::Male);
    for id in IDS {
        let html = build_input_fragment(id, "M", "1");
        assert!(html.contains(&format!(">{}</span>", male.label)), "{id}");
        assert!(html.contains(male.class_name), "{id}");
        assert!(html.contains(&format!(r#"id="input_{id}_M""#)), "{id}");
    }
}

#[test]
fn female_inputs_carry_female_label_and_class() {
    let female = style_for(Sexo::Female);
    for id in IDS {
        let html = build_input_fragment(id, "F", "");
        assert!(html.contains(&format!(">{}</span>", female.label)), "{id}");
        assert!(html.contains(female.class_name), "{id}");
        assert!(html.contains(female.input_style), "{id}");
    }
}

#[test]
fn anything_but_m_takes_the_female_path() {
    let female = style_for(Sexo::Female);
    for category in ["X", "", "f", "m", "male", " M"] {
        let html = build_input_fragment("A1", category, "2");
        assert!(html.contains(female.class_name), "category {category:?}");
        assert!(html.contains(female.input_style), "category {category:?}");
        assert!(html.contains(&format!(">{}</span>", female.label)), "category {category:?}");
        assert!(!html.contains("aprovechamiento-hombre"), "category {category:?}");
        assert!(
            html.contains(&format!(r#"id="input_A1_{category}""#)),
            "category {category:?}"
        );
        assert!(
            html.contains(&format!(r#"data-sexo="{category}""#)),
            "category {category:?}"
        );
    }
}

#[test]
fn paired_cell_three_five() {
    let html = build_paired_cell("A1", "3", "5");
    let inputs: Vec<&str> = html.split("<input").skip(1).collect();
    assert_eq!(inputs.len(), 2);
    assert!(inputs[0].contains(r#"value="3""#));
    assert!(inputs[0].contains(r#"data-sexo="M""#));
    assert!(inputs[1].contains(r#"value="5""#));
    assert!(inputs[1].contains(r#"data-sexo="F""#));
}

#[test]
fn empty_value_keeps_placeholder() {
    let html = build_input_fragment("A1", "M", "");
    assert!(html.contains(r#"value="""#));
    assert!(html.contains(r#"placeholder="""#));
}

#[test]
fn output_is_deterministic() {
    assert_eq!(
        build_input_fragment("A1", "M", "9"),
        build_input_fragment("A1", "M", "9")
    );
    assert_eq!(
        build_paired_cell("A1", "3", "5"),
        build_paired_cell("A1", "3", "5")
    );
}

#[test]
fn concurrent_calls_agree() {
    let expected = build_paired_cell("T", "1", "2");
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| build_paired_cell("T", "1", "2")))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
