use serde::Serialize;

/// The "fetch everything" request, optionally sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Unpaged {
    sort: Vec<String>,
}

impl Unpaged {
    pub fn sorted<I, S>(sort: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sort: sort.into_iter().map(Into::into).collect(),
        }
    }

    pub fn sort(&self) -> &[String] {
        &self.sort
    }

    pub fn is_sorted(&self) -> bool {
        !self.sort.is_empty()
    }
}
