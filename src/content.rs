//! Static site copy.

pub const SITE_NAME: &str = "The Oxford Academy";
pub const TAGLINE: &str = "The Future";
pub const LOGO: &str = "OA";

pub const PHONE_PRIMARY: &str = "70105 07288";
pub const PHONE_SECONDARY: &str = "93426 24259";
pub const WHATSAPP_URL: &str = "https://wa.me/917010507288";
pub const ADDRESS: &str = "MM Building 1st Floor, Aishwarya Store Opp Road, Edamal Street, Theni";
pub const MOTTO: &str =
    "Education is the expression of the perfection that already exists in man.";

pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub stats: &'static [(&'static str, &'static str)],
    pub highlights: &'static [Card],
}

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "Led by M.Sneha - ME Comms",
    headline: "Education is the Expression of Perfection",
    intro: "From IELTS to Programming Languages, from Competitive Exams to \
            Personality Development - We offer comprehensive education for all \
            ages and aspirations.",
    stats: &[
        ("15+", "Course Categories"),
        ("500+", "Students Enrolled"),
        ("10+", "Years Experience"),
    ],
    highlights: &[
        Card {
            icon: "🎓",
            title: "IELTS & Competitive Exams",
            text: "Expert coaching with proven track record",
        },
        Card {
            icon: "💻",
            title: "Programming Languages",
            text: "Learn modern tech skills from basics to advanced",
        },
        Card {
            icon: "🌟",
            title: "Professional Development",
            text: "Build confidence and leadership skills",
        },
    ],
};

pub const ABOUT_INTRO: &str = "Located at MM Building 1st Floor, Aishwarya Store Opp Road, \
     Edamal Street, Theni. We are committed to providing quality education across \
     multiple disciplines.";

pub const ABOUT_FEATURES: &[Card] = &[
    Card {
        icon: "◆",
        title: "Expert Faculty",
        text: "Learn from M.Sneha (ME Comms) and experienced professionals",
    },
    Card {
        icon: "◆",
        title: "Comprehensive Curriculum",
        text: "15+ course categories covering all educational needs",
    },
    Card {
        icon: "◆",
        title: "Small Batch Size",
        text: "Personalized attention with limited students per batch",
    },
    Card {
        icon: "◆",
        title: "Proven Results",
        text: "500+ successful students with excellent outcomes",
    },
];

pub const VISION: &str = "\"Education is the expression of the perfection that already \
     exists in man.\" We believe in nurturing potential and transforming lives through \
     quality education accessible to everyone - from kids to professionals.";

pub const VISION_POINTS: &[&str] = &[
    "All syllabus and all subjects covered",
    "Distance education available",
    "Placement and training (including onsite)",
];

/// Extra paragraphs shown on the standalone About page.
pub const ABOUT_STORY: &[&str] = &[
    "Founded by M.Sneha (ME Comms), The Oxford Academy has been a beacon of quality \
     education in Theni for over a decade. Our journey began with a simple vision: to \
     make quality education accessible to everyone, from kids to professionals.",
    "Located at MM Building 1st Floor, Aishwarya Store Opp Road, Edamal Street, Theni, \
     we have grown from a small coaching center to a comprehensive educational \
     institution offering 15+ course categories.",
];

pub const SERVICES_INTRO: &str = "Comprehensive educational services tailored to meet \
     diverse learning needs across all age groups";

pub const SERVICES: &[(&str, &str)] = &[
    ("IELTS", "Comprehensive IELTS preparation with expert guidance"),
    ("Competitive Exam Coaching", "Expert coaching for all competitive examinations"),
    ("Distance Education", "Learn from anywhere with our distance education programs"),
    ("Placement & Training", "Including onsite training and job placement assistance"),
    ("Spoken Hindi", "Master Hindi language with native-like fluency"),
    ("Call Centre Training", "Professional training for call center operations"),
    ("Commercial Communication", "Enhance your business communication skills"),
    ("Corporate Communication", "Professional communication for corporate environments"),
    ("Personality Development", "Build confidence and develop your personality"),
    ("Professional Training", "Industry-standard professional training programs"),
    ("Programming Languages", "Learn popular programming languages from scratch"),
    ("Montessori Training", "Professional Montessori teacher training programs"),
    ("Home Tuition", "All syllabus and all subjects covered at home"),
    ("Spoken English", "English for all - from kids to professionals"),
];

pub const COURSES_INTRO: &str =
    "Choose from our wide range of courses designed to help you achieve your goals";

pub struct Testimonial {
    pub name: &'static str,
    pub course: &'static str,
    pub rating: usize,
    pub comment: &'static str,
}

pub const TESTIMONIALS_INTRO: &str =
    "Hear what our successful students have to say about their learning experience";

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Sharma",
        course: "IELTS",
        rating: 5,
        comment: "The Oxford Academy helped me achieve a band score of 8.0 in IELTS. \
                  M.Sneha mam's teaching methodology is excellent!",
    },
    Testimonial {
        name: "Rajesh Kumar",
        course: "Programming",
        rating: 5,
        comment: "I learned Python and Java here. The practical approach and hands-on \
                  projects made learning easy and enjoyable.",
    },
    Testimonial {
        name: "Anitha Lakshmi",
        course: "Competitive Exams",
        rating: 5,
        comment: "Excellent coaching for competitive exams. I cleared my bank exam in \
                  the first attempt. Thank you Oxford Academy!",
    },
    Testimonial {
        name: "Mohammed Asif",
        course: "Spoken English",
        rating: 5,
        comment: "My English communication skills improved dramatically. Now I can \
                  confidently speak in any professional setting.",
    },
];

pub const CONTACT_INTRO: &str = "Have questions? We'd love to hear from you. Send us a \
     message and we'll respond as soon as possible.";

pub const POPULAR_COURSES: &[&str] = &[
    "IELTS Coaching",
    "Spoken English",
    "Programming Languages",
    "Competitive Exams",
    "Personality Development",
];

pub const FOOTER_BLURB: &str = "Education is the expression of the perfection that \
     already exists in man. Empowering students from kids to professionals.";

pub fn copyright(year: u32) -> String {
    format!("© {} {}. All rights reserved.", year, SITE_NAME)
}
