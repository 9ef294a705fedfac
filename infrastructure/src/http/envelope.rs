use serde::Deserialize;

/// Some backends wrap payloads as `{"data": ...}`, others send them bare.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Bare(T),
    Wrapped { data: T },
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Bare(value) => value,
            Envelope::Wrapped { data } => data,
        }
    }
}
