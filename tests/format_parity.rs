use period_tables::{render, OutputFormat, PeriodTables, Tuning};

/// Pull the comma-separated values between `open` and `close` after `header`
fn values_after(text: &str, header: &str, open: char, close: char) -> Vec<u16> {
    let start = text.find(header).unwrap_or_else(|| panic!("missing {header}"));
    let rest = &text[start + header.len()..];
    let body_start = rest.find(open).unwrap() + 1;
    let body_end = rest.find(close).unwrap();
    rest[body_start..body_end]
        .split(',')
        .map(|value| value.trim().parse().unwrap())
        .collect()
}

fn check_all_formats(tuning: &Tuning) {
    let tables = PeriodTables::generate(tuning).unwrap();
    let c = render(&tables, OutputFormat::C).unwrap();
    let rust = render(&tables, OutputFormat::Rust).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&render(&tables, OutputFormat::Json).unwrap()).unwrap();

    for (index, table) in tables.iter().enumerate() {
        let divisor = table.divisor();
        let expected = table.periods().to_vec();

        let c_values = values_after(&c, &format!("period_table{divisor}[84] PROGMEM ="), '{', '}');
        assert_eq!(c_values, expected, "C table {divisor}");

        let rust_values =
            values_after(&rust, &format!("PERIOD_TABLE{divisor}: [u16; 84] ="), '[', ']');
        assert_eq!(rust_values, expected, "Rust table {divisor}");

        assert_eq!(json[index]["divisor"], divisor as u64);
        let json_values: Vec<u16> = json[index]["periods"]
            .as_array()
            .unwrap()
            .iter()
            .map(|value| value.as_u64().unwrap() as u16)
            .collect();
        assert_eq!(json_values, expected, "JSON table {divisor}");
    }
}

#[test]
fn all_formats_carry_same_periods() {
    check_all_formats(&Tuning::default());
}

#[test]
fn all_formats_carry_same_firmware_periods() {
    check_all_formats(&Tuning::default().with_reload_offset());
}
