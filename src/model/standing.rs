use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentStanding {
    pub student: String,
    pub submissions: usize,
    pub best_score: Option<u64>,
    pub satisfactory: bool,
    pub extra_credit: bool,
}

impl StudentStanding {
    pub fn best_score_label(&self) -> String {
        match self.best_score {
            Some(score) => score.to_string(),
            None => "-".to_string(),
        }
    }
}
