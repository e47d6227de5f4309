#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use lightbnb_data::prelude::*;

/// Records every statement it is asked to run and answers from a queue of canned results.
#[derive(Default)]
pub struct RecordingExecutor {
    responses: Mutex<VecDeque<Result<ResultSet, LightbnbDbError>>>,
    calls: Mutex<Vec<QueryAndParams>>,
}

impl RecordingExecutor {
    pub fn returning(result: Result<ResultSet, LightbnbDbError>) -> Self {
        let exec = Self::default();
        exec.push(result);
        exec
    }

    pub fn push(&self, result: Result<ResultSet, LightbnbDbError>) {
        self.responses.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<QueryAndParams> {
        self.calls.lock().unwrap().clone()
    }

    pub fn only_call(&self) -> QueryAndParams {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one statement, got {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl QueryExecutor for RecordingExecutor {
    async fn execute_select(
        &self,
        query: &str,
        params: &[RowValues],
    ) -> Result<ResultSet, LightbnbDbError> {
        self.calls
            .lock()
            .unwrap()
            .push(QueryAndParams::new(query, params.to_vec()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ResultSet::default()))
    }
}

pub const USER_COLUMNS: [&str; 4] = ["id", "name", "email", "password"];

pub fn user_row(id: i64, name: &str, email: &str) -> Vec<RowValues> {
    vec![
        RowValues::Int(id),
        RowValues::Text(name.into()),
        RowValues::Text(email.into()),
        RowValues::Text("$2a$10$hash".into()),
    ]
}

pub const PROPERTY_COLUMNS: [&str; 16] = [
    "id",
    "owner_id",
    "title",
    "description",
    "thumbnail_photo_url",
    "cover_photo_url",
    "cost_per_night",
    "parking_spaces",
    "number_of_bathrooms",
    "number_of_bedrooms",
    "country",
    "street",
    "city",
    "province",
    "post_code",
    "active",
];

pub fn property_row(id: i64, city: &str, cost_per_night: i64) -> Vec<RowValues> {
    vec![
        RowValues::Int(id),
        RowValues::Int(1),
        RowValues::Text(format!("Property {id}")),
        RowValues::Text("description".into()),
        RowValues::Text("thumb.jpg".into()),
        RowValues::Text("cover.jpg".into()),
        RowValues::Int(cost_per_night),
        RowValues::Int(1),
        RowValues::Int(2),
        RowValues::Int(3),
        RowValues::Text("Canada".into()),
        RowValues::Text("1 Main St".into()),
        RowValues::Text(city.into()),
        RowValues::Text("BC".into()),
        RowValues::Text("V5K".into()),
        RowValues::Bool(true),
    ]
}
