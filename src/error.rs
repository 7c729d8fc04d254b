#[derive(thiserror::Error, Debug)]
pub enum DateError {
    #[error("RangeError: {message} (at {method} {file}:{line})")]
    RangeError {
        message: String,
        file: String,
        line: usize,
        method: String,
    },

    #[error("Invalid time zone '{value}'")]
    InvalidZone { value: String },

    #[error("Unknown test case '{id}'")]
    UnknownTestCase { id: String },

    #[error("std::io error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DateError {
    /// The message without call-site decoration, as a script would see it.
    pub fn message(&self) -> String {
        match self {
            DateError::RangeError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

// Macro that constructs a RangeError using the compile-time caller
// location and the provided message. Using a macro (rather than a
// function) ensures `file!()` and `line!()` expand to the site where the
// macro is invoked.
#[macro_export]
macro_rules! range_error_here {
    ($msg:expr) => {
        $crate::DateError::RangeError {
            message: $msg.to_string(),
            file: file!().to_string(),
            line: line!() as usize,
            method: $crate::function_name!().to_string(),
        }
    };
}

#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // remove the trailing "::f"
        &name[..name.len() - 3]
    }};
}
