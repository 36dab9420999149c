//! Sample profiles written into an empty backend on first start.
//!
//! Both backends ship the same five people. Only the `image` values differ:
//! the local store points at bundled asset file names, the document store at
//! hosted portrait URLs.

use crate::model::profile::{Coordinates, Experience, ProfileInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedVariant {
    Document,
    Local,
}

const LOCAL_IMAGES: [&str; 5] = ["img1.webp", "krishna.jpeg", "tejas.jpg", "image.jpeg", ""];

const DOCUMENT_IMAGE: &str = "https://source.unsplash.com/random/300x300?portrait";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|x| x.to_string()).collect()
}

fn experience(company: &str, position: &str, duration: &str, location: &str) -> Vec<Experience> {
    vec![Experience {
        company: company.to_string(),
        position: position.to_string(),
        duration: duration.to_string(),
        location: location.to_string(),
    }]
}

pub fn seed_profiles(variant: SeedVariant) -> Vec<ProfileInput> {
    let mut profiles = base_profiles();
    for (idx, profile) in profiles.iter_mut().enumerate() {
        profile.image = match variant {
            SeedVariant::Local => LOCAL_IMAGES[idx].to_string(),
            SeedVariant::Document => DOCUMENT_IMAGE.to_string(),
        };
    }
    profiles
}

fn base_profiles() -> Vec<ProfileInput> {
    vec![
        ProfileInput {
            name: "Pratiksha Padwal".to_string(),
            title: "Senior Software Engineer".to_string(),
            location: "Aurangabad, Maharashtra".to_string(),
            coordinates: Coordinates {
                lat: 19.7515,
                lng: 75.7139,
            },
            description: "Full-stack developer with 5+ years of experience in React and modern web technologies.".to_string(),
            email: "pratiksha.padwal@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            interests: strings(&["React", "JavaScript", "Web Development", "UI/UX Design", "Node.js", "MongoDB"]),
            bio: "Pratiksha is a passionate software engineer based in Aurangabad, Maharashtra. She specializes in building scalable web applications using React and modern JavaScript frameworks.".to_string(),
            image: String::new(),
            education: Some("B.Tech in Computer Science, Dr. Babasaheb Ambedkar Marathwada University".to_string()),
            languages: strings(&["English", "Marathi", "Hindi"]),
            skills: strings(&["React", "Node.js", "MongoDB", "Express", "TypeScript", "Git", "AWS"]),
            experience: experience("Tech Solutions India", "Senior Software Engineer", "2020 - Present", "Aurangabad, Maharashtra"),
        },
        ProfileInput {
            name: "Rahul Sharma".to_string(),
            title: "Tech Lead".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            coordinates: Coordinates {
                lat: 19.0760,
                lng: 72.8777,
            },
            description: "Tech Lead with 8+ years of experience in enterprise applications and cloud architecture.".to_string(),
            email: "rahul.sharma@example.com".to_string(),
            phone: "+91 98765 12345".to_string(),
            interests: strings(&["Java", "Spring Boot", "Microservices", "Cloud Computing", "DevOps", "System Design"]),
            bio: "Rahul leads a team of developers at a prominent Mumbai-based tech company. He has extensive experience in building scalable enterprise applications and implementing cloud solutions.".to_string(),
            image: String::new(),
            education: Some("M.Tech in Computer Science, IIT Mumbai".to_string()),
            languages: strings(&["English", "Hindi", "Marathi"]),
            skills: strings(&["Java", "Spring Boot", "AWS", "Docker", "Kubernetes", "CI/CD", "System Design"]),
            experience: experience("Enterprise Solutions Ltd", "Tech Lead", "2019 - Present", "Mumbai, Maharashtra"),
        },
        ProfileInput {
            name: "Priya Patel".to_string(),
            title: "Senior UI/UX Designer".to_string(),
            location: "Pune, Maharashtra".to_string(),
            coordinates: Coordinates {
                lat: 18.5204,
                lng: 73.8567,
            },
            description: "Creative designer with 6+ years of experience in user experience and interface design.".to_string(),
            email: "priya.patel@example.com".to_string(),
            phone: "+91 98765 67890".to_string(),
            interests: strings(&["UI Design", "User Experience", "Figma", "Prototyping", "Design Systems", "User Research"]),
            bio: "Priya is a talented UI/UX designer based in Pune, known for creating intuitive and engaging user interfaces.".to_string(),
            image: String::new(),
            education: Some("B.Des in Interaction Design, MIT Institute of Design, Pune".to_string()),
            languages: strings(&["English", "Marathi", "Hindi", "Gujarati"]),
            skills: strings(&["Figma", "Adobe XD", "Sketch", "User Research", "Prototyping", "Design Systems"]),
            experience: experience("Design Innovations", "Senior UI/UX Designer", "2021 - Present", "Pune, Maharashtra"),
        },
        ProfileInput {
            name: "Amit Deshmukh".to_string(),
            title: "Data Scientist".to_string(),
            location: "Nagpur, Maharashtra".to_string(),
            coordinates: Coordinates {
                lat: 21.1458,
                lng: 79.0882,
            },
            description: "Data Scientist specializing in machine learning and predictive analytics.".to_string(),
            email: "amit.deshmukh@example.com".to_string(),
            phone: "+91 98765 23456".to_string(),
            interests: strings(&["Machine Learning", "Python", "Data Analysis", "AI", "Big Data", "Deep Learning"]),
            bio: "Amit is a skilled Data Scientist working in Nagpur, focusing on implementing machine learning solutions for various industries.".to_string(),
            image: String::new(),
            education: Some("M.Sc in Data Science, VNIT Nagpur".to_string()),
            languages: strings(&["English", "Marathi", "Hindi"]),
            skills: strings(&["Python", "TensorFlow", "PyTorch", "SQL", "Data Analysis", "Machine Learning"]),
            experience: experience("Data Insights Solutions", "Senior Data Scientist", "2020 - Present", "Nagpur, Maharashtra"),
        },
        ProfileInput {
            name: "Neha Kulkarni".to_string(),
            title: "Mobile App Developer".to_string(),
            location: "Nashik, Maharashtra".to_string(),
            coordinates: Coordinates {
                lat: 20.0059,
                lng: 73.7897,
            },
            description: "Mobile app developer specializing in React Native and Flutter development.".to_string(),
            email: "neha.kulkarni@example.com".to_string(),
            phone: "+91 98765 34567".to_string(),
            interests: strings(&["React Native", "Flutter", "Mobile Development", "iOS", "Android", "UI/UX"]),
            bio: "Neha is an experienced mobile app developer based in Nashik, known for building cross-platform mobile applications.".to_string(),
            image: String::new(),
            education: Some("B.E in Computer Engineering, K.K. Wagh Institute of Engineering".to_string()),
            languages: strings(&["English", "Marathi", "Hindi"]),
            skills: strings(&["React Native", "Flutter", "JavaScript", "TypeScript", "Mobile UI/UX", "Firebase"]),
            experience: experience("Mobile Solutions India", "Lead Mobile Developer", "2019 - Present", "Nashik, Maharashtra"),
        },
    ]
}
