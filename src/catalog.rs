//! Course catalog and the category filter behind the Courses tabs.

/// Wildcard label that selects every course.
pub const ALL: &str = "All";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Language,
    Technology,
    Professional,
    Competitive,
}

impl Category {
    pub fn all() -> [Category; 4] {
        [
            Category::Language,
            Category::Technology,
            Category::Professional,
            Category::Competitive,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Language => "Language",
            Category::Technology => "Technology",
            Category::Professional => "Professional",
            Category::Competitive => "Competitive",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub title: &'static str,
    pub category: Category,
    pub duration: &'static str,
    pub students: &'static str,
    pub rating: f32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub icon: &'static str,
}

pub const CATALOG: &[Course] = &[
    Course {
        title: "IELTS Preparation",
        category: Category::Language,
        duration: "3 months",
        students: "100+",
        rating: 4.9,
        description: "Comprehensive IELTS coaching for all modules",
        features: &["Speaking", "Writing", "Reading", "Listening"],
        icon: "🎓",
    },
    Course {
        title: "Spoken English",
        category: Category::Language,
        duration: "4 months",
        students: "200+",
        rating: 4.8,
        description: "Master English communication from basics to advanced",
        features: &["Grammar", "Vocabulary", "Pronunciation", "Fluency"],
        icon: "💬",
    },
    Course {
        title: "Programming Languages",
        category: Category::Technology,
        duration: "6 months",
        students: "150+",
        rating: 4.9,
        description: "Learn Python, Java, JavaScript and more",
        features: &["Python", "Java", "Web Dev", "Projects"],
        icon: "💻",
    },
    Course {
        title: "Competitive Exam Coaching",
        category: Category::Competitive,
        duration: "6-12 months",
        students: "300+",
        rating: 4.7,
        description: "Coaching for all government competitive exams",
        features: &["Study Material", "Mock Tests", "Expert Faculty", "Current Affairs"],
        icon: "📚",
    },
    Course {
        title: "Personality Development",
        category: Category::Professional,
        duration: "2 months",
        students: "80+",
        rating: 4.8,
        description: "Build confidence and professional persona",
        features: &["Communication", "Leadership", "Grooming", "Interview Skills"],
        icon: "🌟",
    },
    Course {
        title: "Corporate Communication",
        category: Category::Professional,
        duration: "3 months",
        students: "120+",
        rating: 4.7,
        description: "Professional communication for workplace",
        features: &["Business English", "Presentations", "Email Writing", "Meetings"],
        icon: "💼",
    },
];

/// `"All"` followed by the categories present in `catalog`, in declaration order.
pub fn categories(catalog: &[Course]) -> Vec<&'static str> {
    let mut out = vec![ALL];
    out.extend(
        Category::all()
            .into_iter()
            .filter(|c| catalog.iter().any(|course| course.category == *c))
            .map(|c| c.label()),
    );
    out
}

/// Courses whose category label equals `selected`, in input order.
///
/// `"All"` passes everything through; an unknown label yields nothing.
pub fn filter_courses<'a, I>(courses: I, selected: &str) -> Vec<&'a Course>
where
    I: IntoIterator<Item = &'a Course>,
{
    if selected == ALL {
        return courses.into_iter().collect();
    }
    match Category::from_label(selected) {
        Some(cat) => courses.into_iter().filter(|c| c.category == cat).collect(),
        None => Vec::new(),
    }
}

/// The Courses view's selected tab.
pub struct CourseFilter {
    selected: String,
}

impl Default for CourseFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseFilter {
    pub fn new() -> Self {
        Self {
            selected: ALL.to_string(),
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Any label can be selected from any other.
    pub fn select(&mut self, label: &str) {
        self.selected = label.to_string();
    }

    pub fn visible<'a>(&self, catalog: &'a [Course]) -> Vec<&'a Course> {
        filter_courses(catalog, &self.selected)
    }
}
