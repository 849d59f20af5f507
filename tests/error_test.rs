use std::io;

use magisk_setup::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::InvalidModuleName {
        name: "My Module".to_string(),
        reason: "module name contains a space".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid module name 'My Module': module name contains a space."
    );

    let err = Error::ProcessError {
        path: "./module.prop".to_string(),
        message: "permission denied".to_string(),
    };
    assert_eq!(err.to_string(), "Error processing file ./module.prop: permission denied.");
}
