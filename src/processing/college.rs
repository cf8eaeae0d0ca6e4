use crate::models::college::College;
use crate::processing::{ProcessingError, ProcessingResult};
use crate::repository::{CollegeReader, CollegeWriter};

/// Lists the full catalog with every stored column.
pub fn process_list_colleges<R>(repo: &R) -> ProcessingResult<Vec<College>>
where
    R: CollegeReader,
{
    let colleges = repo.list_colleges()?;
    log::info!("Listed {} colleges", colleges.len());
    Ok(colleges)
}

pub fn process_get_college<R>(name: &str, repo: &R) -> ProcessingResult<Option<College>>
where
    R: CollegeReader,
{
    let college = repo.get_college(name)?;
    match &college {
        Some(_) => log::info!("Found college {name}"),
        None => log::warn!("College not found: {name}"),
    }
    Ok(college)
}

/// Adds catalog entries, leaving existing names untouched.
pub fn process_add_colleges<R>(colleges: &[College], repo: &R) -> ProcessingResult<usize>
where
    R: CollegeWriter,
{
    if colleges.iter().any(|college| college.name.trim().is_empty()) {
        return Err(ProcessingError::InvalidInput(
            "college name is required".to_string(),
        ));
    }

    let inserted = repo.create_colleges(colleges)?;
    log::info!("Added {inserted} of {} colleges", colleges.len());
    Ok(inserted)
}
