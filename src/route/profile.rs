use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};

use crate::{
    schema::{
        common::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
        profile::{
            ProfileCreateRequest, ProfileCreateResponses, ProfileDeleteResponses,
            ProfileDetailResponses, ProfileListResponses, ProfileResponse, ProfileUpdateRequest,
            ProfileUpdateResponses,
        },
    },
    store::StoreError,
    AppState,
};

#[derive(Tags)]
enum ApiProfileTags {
    Profile,
}

pub struct ApiProfile;

fn profile_not_found(id: &str) -> NotFoundResponse {
    NotFoundResponse {
        message: format!("profile with id = {} not found", id),
    }
}

#[OpenApi]
impl ApiProfile {
    #[oai(path = "/profile/", method = "get", tag = "ApiProfileTags::Profile")]
    async fn list_profile_api(
        &self,
        Query(search): Query<Option<String>>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileListResponses {
        let res = match search {
            Some(term) => state.profiles.search(&term).await,
            None => state.profiles.get_all().await,
        };
        let data = match res {
            Ok(val) => val,
            Err(err) => {
                return ProfileListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.profile",
                        "list_profile_api",
                        "list profiles",
                        &err.to_string(),
                    ),
                ))
            }
        };
        ProfileListResponses::Ok(Json(data.into_iter().map(ProfileResponse::from).collect()))
    }

    #[oai(path = "/profile/detail/", method = "get", tag = "ApiProfileTags::Profile")]
    async fn get_detail_profile_api(
        &self,
        Query(id): Query<String>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileDetailResponses {
        match state.profiles.get_by_id(&id).await {
            Ok(val) => ProfileDetailResponses::Ok(Json(val.into())),
            Err(StoreError::NotFound(_)) => {
                ProfileDetailResponses::NotFound(Json(profile_not_found(&id)))
            }
            Err(err) => ProfileDetailResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "get_detail_profile_api",
                    "get profile by id",
                    &err.to_string(),
                ),
            )),
        }
    }

    #[oai(path = "/profile/", method = "post", tag = "ApiProfileTags::Profile")]
    async fn create_profile_api(
        &self,
        Json(json): Json<ProfileCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileCreateResponses {
        if let Err(message) = json.validate() {
            return ProfileCreateResponses::BadRequest(Json(BadRequestResponse { message }));
        }
        match state.profiles.add(json.into_input()).await {
            Ok(val) => ProfileCreateResponses::Ok(Json(val.into())),
            Err(err) => ProfileCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "create_profile_api",
                    "add profile",
                    &err.to_string(),
                ),
            )),
        }
    }

    #[oai(path = "/profile/", method = "put", tag = "ApiProfileTags::Profile")]
    async fn update_profile_api(
        &self,
        Query(id): Query<String>,
        Json(json): Json<ProfileUpdateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileUpdateResponses {
        if let Err(message) = json.validate() {
            return ProfileUpdateResponses::BadRequest(Json(BadRequestResponse { message }));
        }
        match state.profiles.update(&id, json.into_patch()).await {
            Ok(val) => ProfileUpdateResponses::Ok(Json(val.into())),
            Err(StoreError::NotFound(_)) => {
                ProfileUpdateResponses::NotFound(Json(profile_not_found(&id)))
            }
            Err(err) => ProfileUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "update_profile_api",
                    "update profile",
                    &err.to_string(),
                ),
            )),
        }
    }

    #[oai(path = "/profile/", method = "delete", tag = "ApiProfileTags::Profile")]
    async fn delete_profile_api(
        &self,
        Query(id): Query<String>,
        state: Data<&Arc<AppState>>,
    ) -> ProfileDeleteResponses {
        if let Err(err) = state.profiles.delete(&id).await {
            return ProfileDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "delete_profile_api",
                    "delete profile",
                    &err.to_string(),
                ),
            ));
        }
        ProfileDeleteResponses::NoContent
    }

    #[oai(path = "/profile/initialize/", method = "post", tag = "ApiProfileTags::Profile")]
    async fn initialize_profile_api(&self, state: Data<&Arc<AppState>>) -> ProfileListResponses {
        match state.profiles.initialize().await {
            Ok(val) => {
                ProfileListResponses::Ok(Json(val.into_iter().map(ProfileResponse::from).collect()))
            }
            Err(err) => ProfileListResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "initialize_profile_api",
                    "initialize profiles",
                    &err.to_string(),
                ),
            )),
        }
    }
}
