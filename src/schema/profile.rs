use std::sync::LazyLock;

use poem_openapi::{payload::Json, ApiResponse, Object};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    core::utils::datetime_to_string_opt,
    model::profile::{Coordinates, Experience, Profile, ProfileInput, ProfilePatch},
};

use super::common::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Object, Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct CoordinatesSchema {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinates> for CoordinatesSchema {
    fn from(val: Coordinates) -> Self {
        Self {
            lat: val.lat,
            lng: val.lng,
        }
    }
}

impl From<CoordinatesSchema> for Coordinates {
    fn from(val: CoordinatesSchema) -> Self {
        Self {
            lat: val.lat,
            lng: val.lng,
        }
    }
}

#[derive(Object, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ExperienceSchema {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
}

impl From<Experience> for ExperienceSchema {
    fn from(val: Experience) -> Self {
        Self {
            company: val.company,
            position: val.position,
            duration: val.duration,
            location: val.location,
        }
    }
}

impl From<ExperienceSchema> for Experience {
    fn from(val: ExperienceSchema) -> Self {
        Self {
            company: val.company,
            position: val.position,
            duration: val.duration,
            location: val.location,
        }
    }
}

#[derive(Object, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub title: String,
    pub location: String,
    pub coordinates: CoordinatesSchema,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub interests: Vec<String>,
    pub bio: String,
    pub image: String,
    pub education: Option<String>,
    pub languages: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceSchema>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        let data = profile.data;
        Self {
            id: profile.id.to_string(),
            name: data.name,
            title: data.title,
            location: data.location,
            coordinates: data.coordinates.into(),
            description: data.description,
            email: data.email,
            phone: data.phone,
            interests: data.interests,
            bio: data.bio,
            image: data.image,
            education: data.education,
            languages: data.languages,
            skills: data.skills,
            experience: data.experience.into_iter().map(Into::into).collect(),
            created_at: datetime_to_string_opt(profile.created_at),
            updated_at: datetime_to_string_opt(profile.updated_at),
        }
    }
}

#[derive(ApiResponse)]
pub enum ProfileListResponses {
    #[oai(status = 200)]
    Ok(Json<Vec<ProfileResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProfileDetailResponses {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ProfileCreateRequest {
    pub name: String,
    pub title: String,
    pub location: String,
    pub coordinates: CoordinatesSchema,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub interests: Vec<String>,
    pub bio: String,
    pub image: Option<String>,
    pub education: Option<String>,
    pub languages: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<ExperienceSchema>>,
}

impl ProfileCreateRequest {
    /// Form rules: required text present, a plausible email, sane coordinates
    /// and at least one interest.
    pub fn validate(&self) -> Result<(), String> {
        check_required("name", &self.name)?;
        check_required("title", &self.title)?;
        check_required("location", &self.location)?;
        check_coordinates(&self.coordinates)?;
        check_required("description", &self.description)?;
        check_email(&self.email)?;
        check_required("phone", &self.phone)?;
        check_interests(&self.interests)?;
        check_required("bio", &self.bio)
    }

    pub fn into_input(self) -> ProfileInput {
        ProfileInput {
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            location: self.location.trim().to_string(),
            coordinates: self.coordinates.into(),
            description: self.description,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            interests: normalize_interests(self.interests),
            bio: self.bio,
            image: self.image.unwrap_or_default(),
            education: self.education,
            languages: self.languages.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            experience: self
                .experience
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[derive(ApiResponse)]
pub enum ProfileCreateResponses {
    #[oai(status = 201)]
    Ok(Json<ProfileResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize, Serialize, Clone, Debug, Default)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub coordinates: Option<CoordinatesSchema>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub interests: Option<Vec<String>>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub education: Option<String>,
    pub languages: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<ExperienceSchema>>,
}

impl ProfileUpdateRequest {
    /// Same rules as creation, applied only to the fields being changed.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("name", &self.name),
            ("title", &self.title),
            ("location", &self.location),
            ("description", &self.description),
            ("phone", &self.phone),
            ("bio", &self.bio),
        ];
        for (field, value) in required {
            if let Some(value) = value {
                check_required(field, value)?;
            }
        }
        if let Some(coordinates) = &self.coordinates {
            check_coordinates(coordinates)?;
        }
        if let Some(email) = &self.email {
            check_email(email)?;
        }
        if let Some(interests) = &self.interests {
            check_interests(interests)?;
        }
        Ok(())
    }

    pub fn into_patch(self) -> ProfilePatch {
        ProfilePatch {
            name: self.name.map(|x| x.trim().to_string()),
            title: self.title.map(|x| x.trim().to_string()),
            location: self.location.map(|x| x.trim().to_string()),
            coordinates: self.coordinates.map(Into::into),
            description: self.description,
            email: self.email.map(|x| x.trim().to_string()),
            phone: self.phone.map(|x| x.trim().to_string()),
            interests: self.interests.map(normalize_interests),
            bio: self.bio,
            image: self.image,
            education: self.education,
            languages: self.languages,
            skills: self.skills,
            experience: self
                .experience
                .map(|items| items.into_iter().map(Into::into).collect()),
        }
    }
}

#[derive(ApiResponse)]
pub enum ProfileUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProfileDeleteResponses {
    #[oai(status = 204)]
    NoContent,

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

fn check_required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(())
}

fn check_email(value: &str) -> Result<(), String> {
    check_required("email", value)?;
    if !EMAIL_PATTERN.is_match(value.trim()) {
        return Err("email is invalid".to_string());
    }
    Ok(())
}

fn check_coordinates(value: &CoordinatesSchema) -> Result<(), String> {
    if !value.lat.is_finite() || !(-90.0..=90.0).contains(&value.lat) {
        return Err("coordinates.lat must be between -90 and 90".to_string());
    }
    if !value.lng.is_finite() || !(-180.0..=180.0).contains(&value.lng) {
        return Err("coordinates.lng must be between -180 and 180".to_string());
    }
    Ok(())
}

fn check_interests(value: &[String]) -> Result<(), String> {
    if value.iter().all(|x| x.trim().is_empty()) {
        return Err("at least one interest is required".to_string());
    }
    Ok(())
}

/// Trimmed, without blanks, first occurrence wins.
fn normalize_interests(interests: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = vec![];
    for interest in interests {
        let interest = interest.trim().to_string();
        if !interest.is_empty() && !result.contains(&interest) {
            result.push(interest);
        }
    }
    result
}
