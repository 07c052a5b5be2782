use serde::Deserialize;

/// A list on the board, as returned by `GET /boards/{id}/lists`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
}

/// One card from `GET /lists/{id}/cards`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCard {
    pub name: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl RawCard {
    #[cfg(test)]
    pub fn new(name: &str, description: &str, labels: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            labels: labels
                .iter()
                .map(|l| Label {
                    name: l.to_string(),
                })
                .collect(),
        }
    }

    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.name.as_str())
    }
}
