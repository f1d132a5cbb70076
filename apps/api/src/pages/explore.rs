#![allow(dead_code)]

//! Role explorer filters: plain case-insensitive substring matching over
//! the job postings, nothing smarter.

use crate::models::JobPosting;

pub fn filter_jobs<'a>(
    jobs: &'a [JobPosting],
    keyword: &str,
    location: &str,
) -> Vec<&'a JobPosting> {
    let keyword = keyword.trim().to_lowercase();
    let location = location.trim().to_lowercase();
    jobs.iter()
        .filter(|job| {
            keyword.is_empty()
                || job.title.to_lowercase().contains(&keyword)
                || job.company.to_lowercase().contains(&keyword)
                || job.description.to_lowercase().contains(&keyword)
        })
        .filter(|job| location.is_empty() || job.location.to_lowercase().contains(&location))
        .collect()
}
