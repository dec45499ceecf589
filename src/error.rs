use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Rotation axis too short to normalize. The target matrix is left as it was.
    #[error("rotation axis has near-zero length ({length})")]
    DegenerateAxis { length: f32 },

    #[error("invalid frustum: {0}")]
    InvalidFrustum(&'static str),

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("graphics context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("shader compile failed: {0}")]
    ShaderCompile(String),

    #[error("program link failed: {0}")]
    ProgramLink(String),

    #[error("attribute `{0}` missing from program")]
    MissingAttribute(&'static str),

    #[error("uniform `{0}` missing from program")]
    MissingUniform(&'static str),

    #[error("dom: {0}")]
    Dom(String),
}

impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
