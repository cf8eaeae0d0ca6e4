use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ratings::{RatingAverages, YesNoStats};
use crate::matching::{MatchError, SearchService};
use crate::models::college::College;
use crate::models::review::{NewReview, Review};
use crate::repository::{
    CollegeReader, CollegeWriter, RepositoryError, ReviewReader, ReviewWriter,
};

pub mod college;
pub mod review;
pub mod search;

/// Requests accepted by the worker.
#[derive(Deserialize, Debug)]
pub enum ZMQMessage {
    ListColleges,
    College(String),
    Search(String),
    Reviews(String),
    RatingAverages(String),
    Stats(String),
    SubmitReview(NewReview),
    AddColleges(Vec<College>),
}

/// Reply sent back for every request.
#[derive(Serialize, Debug, PartialEq)]
pub enum ZMQReply {
    Colleges(Vec<College>),
    College(Option<College>),
    Names(Vec<String>),
    Reviews(Option<Vec<Review>>),
    RatingAverages(RatingAverages),
    Stats(YesNoStats),
    Submitted(usize),
    Added(usize),
    Error(String),
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Runs one request against the store and turns the outcome into a reply.
pub fn handle_message<R>(msg: ZMQMessage, repo: &R, service: &SearchService) -> ZMQReply
where
    R: CollegeReader + CollegeWriter + ReviewReader + ReviewWriter,
{
    log::info!("Received request: {msg:?}");

    let reply = match msg {
        ZMQMessage::ListColleges => college::process_list_colleges(repo).map(ZMQReply::Colleges),
        ZMQMessage::College(name) => {
            college::process_get_college(&name, repo).map(ZMQReply::College)
        }
        ZMQMessage::Search(query) => {
            search::process_search_message(&query, repo, service).map(ZMQReply::Names)
        }
        ZMQMessage::Reviews(name) => {
            review::process_list_reviews(&name, repo).map(ZMQReply::Reviews)
        }
        ZMQMessage::RatingAverages(name) => {
            review::process_rating_averages(&name, repo).map(ZMQReply::RatingAverages)
        }
        ZMQMessage::Stats(name) => review::process_stats(&name, repo).map(ZMQReply::Stats),
        ZMQMessage::SubmitReview(new_review) => {
            review::process_submit_review(&new_review, repo).map(ZMQReply::Submitted)
        }
        ZMQMessage::AddColleges(colleges) => {
            college::process_add_colleges(&colleges, repo).map(ZMQReply::Added)
        }
    };

    reply.unwrap_or_else(|e| {
        log::error!("Request failed: {e}");
        ZMQReply::Error(e.to_string())
    })
}
