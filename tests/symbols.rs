use infix::{
    error::{EvalError, VarError},
    evaluate,
    interpreter::symbols::{SymbolEntry, SymbolTable, parse_value},
};

#[test]
fn constants_are_seeded() {
    let symbols = SymbolTable::new();
    assert!((symbols.lookup("pi").unwrap() - std::f64::consts::PI).abs() < 1e-9);
    assert_eq!(symbols.lookup("e"), Some(std::f64::consts::E));
    assert!(symbols.is_constant("pi"));
    assert!(!symbols.is_constant("x"));
}

#[test]
fn constants_cannot_be_redefined_or_removed() {
    let mut symbols = SymbolTable::new();
    assert_eq!(symbols.define("pi", 1.0),
               Err(VarError::ReservedName { name: "pi".to_string() }));
    assert_eq!(symbols.define(" PI ", 1.0),
               Err(VarError::ReservedName { name: "pi".to_string() }));

    assert_eq!(symbols.undefine("pi"), None);
    assert_eq!(symbols.lookup("pi"), Some(std::f64::consts::PI));
}

#[test]
fn builtin_function_names_are_reserved() {
    let mut symbols = SymbolTable::new();
    for name in ["sqrt", "sin", "Cos", "tan"] {
        assert!(matches!(symbols.define(name, 1.0), Err(VarError::ReservedName { .. })),
                "{name} was accepted");
    }
}

#[test]
fn existing_variables_must_be_removed_first() {
    let mut symbols = SymbolTable::new();
    symbols.define("x", 1.0).unwrap();
    assert!(matches!(symbols.define("X", 2.0), Err(VarError::ReservedName { .. })));

    assert_eq!(symbols.undefine("x"), Some(1.0));
    symbols.define("x", 2.0).unwrap();
    assert_eq!(symbols.lookup("x"), Some(2.0));
}

#[test]
fn invalid_names_are_rejected() {
    let mut symbols = SymbolTable::new();
    for name in ["", "   ", "2", "2.5", ".5", "1e5", "2x", "a b", "a+b", "x(", "é"] {
        assert!(matches!(symbols.define(name, 1.0), Err(VarError::InvalidName { .. })),
                "{name:?} was accepted");
    }
    assert!(symbols.list().iter().all(|s| s.is_constant));
}

#[test]
fn invalid_name_messages() {
    let mut symbols = SymbolTable::new();
    assert_eq!(symbols.define("", 1.0).unwrap_err().to_string(),
               "Name is required.");
    assert_eq!(symbols.define("2", 5.0).unwrap_err().to_string(),
               "Numbers can not be used as variable names");
    assert_eq!(symbols.define("e", 5.0).unwrap_err().to_string(),
               "Cannot use reserved name: 'e'");
}

#[test]
fn non_finite_values_are_rejected() {
    let mut symbols = SymbolTable::new();
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(symbols.define("x", value), Err(VarError::InvalidValue { .. })));
    }
    assert_eq!(symbols.lookup("x"), None);
}

#[test]
fn parse_value_accepts_numbers_only() {
    assert_eq!(parse_value("42"), Ok(42.0));
    assert_eq!(parse_value("-0.5"), Ok(-0.5));
    assert_eq!(parse_value("1e3"), Ok(1000.0));
    for text in ["", "abc", "NaN", "inf", "1e999", "2*3"] {
        assert!(matches!(parse_value(text), Err(VarError::InvalidValue { .. })),
                "{text:?} was accepted");
    }
}

#[test]
fn undefine_is_idempotent() {
    let mut symbols = SymbolTable::new();
    symbols.define("y", 4.0).unwrap();
    let before = symbols.list();

    assert_eq!(symbols.undefine("nonexistent"), None);
    assert_eq!(symbols.list(), before);

    assert_eq!(symbols.undefine("y"), Some(4.0));
    assert_eq!(symbols.undefine("y"), None);
}

#[test]
fn list_orders_constants_then_sorted_variables() {
    let mut symbols = SymbolTable::new();
    symbols.define("zeta", 3.0).unwrap();
    symbols.define("alpha", 1.0).unwrap();

    assert_eq!(symbols.list(),
               vec![SymbolEntry { name:        "pi".to_string(),
                                  value:       std::f64::consts::PI,
                                  is_constant: true, },
                    SymbolEntry { name:        "e".to_string(),
                                  value:       std::f64::consts::E,
                                  is_constant: true, },
                    SymbolEntry { name:        "alpha".to_string(),
                                  value:       1.0,
                                  is_constant: false, },
                    SymbolEntry { name:        "zeta".to_string(),
                                  value:       3.0,
                                  is_constant: false, }]);
}

#[test]
fn removed_variables_stop_resolving() {
    let mut symbols = SymbolTable::new();
    symbols.define("x", 3.0).unwrap();
    assert_eq!(evaluate("x*2", &symbols), Ok(6.0));

    symbols.undefine("x");
    assert_eq!(evaluate("x*2", &symbols),
               Err(EvalError::UndefinedSymbol { name: "x".to_string() }));
}
