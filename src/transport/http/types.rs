use serde::Deserialize;

/// Response body shapes seen from restaurant backends.
///
/// Older servers return the payload directly; newer ones wrap it as
/// `{ "success": true, "data": ... }`. Extra envelope fields are ignored.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(inner) => inner,
        }
    }
}
