use crate::{model::profile::Profile, service::profile::ProfileService};

pub async fn profile_init(service: &ProfileService) -> anyhow::Result<usize> {
    let profiles = service.initialize().await?;
    Ok(profiles.len())
}

pub async fn profile_list(
    service: &ProfileService,
    search: Option<&str>,
) -> anyhow::Result<Vec<Profile>> {
    let profiles = match search {
        Some(term) => service.search(term).await?,
        None => service.get_all().await?,
    };
    Ok(profiles)
}

/// One line per profile: id, name, title and location.
pub fn format_profile_line(profile: &Profile) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        profile.id, profile.data.name, profile.data.title, profile.data.location
    )
}
