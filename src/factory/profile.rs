use fake::{
    faker::{
        address::en::CityName,
        internet::en::SafeEmail,
        job::en::Title,
        lorem::en::{Paragraph, Sentence, Words},
        name::en::Name,
        phone_number::en::PhoneNumber,
    },
    Dummy, Fake, Faker,
};

use crate::{
    model::profile::{Coordinates, Profile, ProfileInput},
    store::{ProfileStore, StoreResult},
};

pub struct ProfileFactory<T: Clone> {
    modifier_one: fn(x: &ProfileInput, ext: T) -> ProfileInput,
    modifier_many: fn(x: &ProfileInput, idx: usize, ext: T) -> ProfileInput,
}

impl<T: Clone> Default for ProfileFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ProfileFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &ProfileInput, ext: T) -> ProfileInput) {
        self.modifier_one = modifier
    }

    pub fn modified_many(
        &mut self,
        modifier: fn(x: &ProfileInput, idx: usize, ext: T) -> ProfileInput,
    ) {
        self.modifier_many = modifier
    }

    pub fn build_one(&self, ext: T) -> ProfileInput {
        let data = Faker.fake::<ProfileDummy>().into_input();
        (self.modifier_one)(&data, ext)
    }

    pub fn build_many(&self, num: u32, ext: T) -> Vec<ProfileInput> {
        (0..num as usize)
            .map(|idx| {
                let data = Faker.fake::<ProfileDummy>().into_input();
                (self.modifier_many)(&data, idx, ext.clone())
            })
            .collect()
    }

    pub async fn generate_one(&self, store: &dyn ProfileStore, ext: T) -> StoreResult<Profile> {
        store.add(self.build_one(ext)).await
    }

    pub async fn generate_many(
        &self,
        store: &dyn ProfileStore,
        num: u32,
        ext: T,
    ) -> StoreResult<Vec<Profile>> {
        let mut result: Vec<Profile> = vec![];
        for item in self.build_many(num, ext) {
            result.push(store.add(item).await?);
        }
        Ok(result)
    }
}

#[derive(Debug, Dummy, Clone)]
struct ProfileDummy {
    #[dummy(faker = "Name()")]
    pub name: String,
    #[dummy(faker = "Title()")]
    pub title: String,
    #[dummy(faker = "CityName()")]
    pub location: String,
    #[dummy(faker = "-90.0..90.0")]
    pub lat: f64,
    #[dummy(faker = "-180.0..180.0")]
    pub lng: f64,
    #[dummy(faker = "Sentence(3..8)")]
    pub description: String,
    #[dummy(faker = "SafeEmail()")]
    pub email: String,
    #[dummy(faker = "PhoneNumber()")]
    pub phone: String,
    #[dummy(faker = "Words(1..5)")]
    pub interests: Vec<String>,
    #[dummy(faker = "Paragraph(1..3)")]
    pub bio: String,
    #[dummy(faker = "Words(0..4)")]
    pub skills: Vec<String>,
}

impl ProfileDummy {
    fn into_input(self) -> ProfileInput {
        ProfileInput {
            name: self.name,
            title: self.title,
            location: self.location,
            coordinates: Coordinates {
                lat: self.lat,
                lng: self.lng,
            },
            description: self.description,
            email: self.email,
            phone: self.phone,
            interests: self.interests,
            bio: self.bio,
            image: String::new(),
            education: None,
            languages: vec!["English".to_string()],
            skills: self.skills,
            experience: vec![],
        }
    }
}
