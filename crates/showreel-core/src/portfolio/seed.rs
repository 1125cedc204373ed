//! Launch catalog
//!
//! The entries the site shipped with. They double as the fallback whenever
//! the projects slot is absent or unreadable, so a fresh (or corrupted)
//! installation still renders a full grid.

use super::types::{AspectRatio, Category, FALLBACK_VIDEO_URL, Project, STUDIO_NAME};

/// Build the launch catalog, newest work first.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "SAMSUNG - THE ALLIANCE".to_string(),
            category: Category::BrandedContent,
            thumbnail: "https://images.unsplash.com/photo-1610945415295-d9bbf067e59c?q=80&w=1471&auto=format&fit=crop".to_string(),
            video_url: FALLBACK_VIDEO_URL.to_string(),
            client: "SAMSUNG".to_string(),
            director: STUDIO_NAME.to_string(),
            year: "2024".to_string(),
            description: "A global campaign for Samsung Galaxy, focusing on the seamless connection between devices.".to_string(),
            gallery: vec![
                "https://picsum.photos/seed/s1/1200/675".to_string(),
                "https://picsum.photos/seed/s2/1200/675".to_string(),
            ],
            aspect_ratio: AspectRatio::Landscape,
        },
        Project {
            id: "2".to_string(),
            title: "GENESIS - THE EVOLUTION".to_string(),
            category: Category::BrandedContent,
            thumbnail: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?q=80&w=1470&auto=format&fit=crop".to_string(),
            video_url: FALLBACK_VIDEO_URL.to_string(),
            client: "GENESIS MOTORS".to_string(),
            director: STUDIO_NAME.to_string(),
            year: "2024".to_string(),
            description: "Redefining luxury through architectural lines and silent motion."
                .to_string(),
            gallery: vec!["https://picsum.photos/seed/g1/1200/675".to_string()],
            aspect_ratio: AspectRatio::Landscape,
        },
        Project {
            id: "3".to_string(),
            title: "AESTURA - DERMA EDIT".to_string(),
            category: Category::BrandedContent,
            thumbnail: "https://images.unsplash.com/photo-1556228720-195a672e8a03?q=80&w=1374&auto=format&fit=crop".to_string(),
            video_url: FALLBACK_VIDEO_URL.to_string(),
            client: "AESTURA".to_string(),
            director: "KIM SEONG-MIN".to_string(),
            year: "2024".to_string(),
            description: "A vertical series exploring the science of skincare.".to_string(),
            gallery: vec!["https://picsum.photos/seed/ae1/600/1067".to_string()],
            aspect_ratio: AspectRatio::Portrait,
        },
        Project {
            id: "4".to_string(),
            title: "HYUNDAI - THE IONIQ WAY".to_string(),
            category: Category::BrandedContent,
            thumbnail: "https://images.unsplash.com/photo-1605142859862-978be7eba909?q=80&w=1470&auto=format&fit=crop".to_string(),
            video_url: FALLBACK_VIDEO_URL.to_string(),
            client: "HYUNDAI".to_string(),
            director: STUDIO_NAME.to_string(),
            year: "2023".to_string(),
            description: "The journey towards a sustainable future of mobility.".to_string(),
            gallery: vec!["https://picsum.photos/seed/h1/1200/675".to_string()],
            aspect_ratio: AspectRatio::Landscape,
        },
        Project {
            id: "5".to_string(),
            title: "LANEIGE - WATER BANK".to_string(),
            category: Category::BrandedContent,
            thumbnail: "https://images.unsplash.com/photo-1511405946472-a37e3b5ccd47?q=80&w=1287&auto=format&fit=crop".to_string(),
            video_url: FALLBACK_VIDEO_URL.to_string(),
            client: "LANEIGE".to_string(),
            director: STUDIO_NAME.to_string(),
            year: "2024".to_string(),
            description: "High-speed liquid cinematography in a social-first format.".to_string(),
            gallery: vec!["https://picsum.photos/seed/ln1/600/1067".to_string()],
            aspect_ratio: AspectRatio::Portrait,
        },
        Project {
            id: "6".to_string(),
            title: "SK TELECOM - CONNECT".to_string(),
            category: Category::Interview,
            thumbnail: "https://images.unsplash.com/photo-1516280440614-37939bbacd81?q=80&w=1470&auto=format&fit=crop".to_string(),
            video_url: FALLBACK_VIDEO_URL.to_string(),
            client: "SKT".to_string(),
            director: "LEE JAE-HOON".to_string(),
            year: "2023".to_string(),
            description: "Behind the scenes of the digital infrastructure that powers the nation."
                .to_string(),
            gallery: vec!["https://picsum.photos/seed/sk1/1200/675".to_string()],
            aspect_ratio: AspectRatio::Landscape,
        },
        Project {
            id: "7".to_string(),
            title: "ARTIFICIAL METROPOLIS".to_string(),
            category: Category::AiStudio,
            thumbnail: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=1364&auto=format&fit=crop".to_string(),
            video_url: FALLBACK_VIDEO_URL.to_string(),
            client: "EXPERIMENTAL".to_string(),
            director: "AI-CORE".to_string(),
            year: "2024".to_string(),
            description: "A study of machine-generated architecture.".to_string(),
            gallery: vec!["https://picsum.photos/seed/am1/1200/675".to_string()],
            aspect_ratio: AspectRatio::Landscape,
        },
    ]
}
