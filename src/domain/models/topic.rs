use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A named bucket of descriptive content that queries are routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    name: String,
    content: String,
}

impl Topic {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The entry as it is embedded in the generation prompt: the content as a
    /// pretty-printed JSON value.
    pub fn to_prompt_json(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(&self.content).map_err(|e| {
            DomainError::internal(format!("failed to serialize topic {}: {e}", self.name))
        })
    }
}

/// Ordered, read-only set of topics. Iteration order is definition order.
#[derive(Debug, Clone)]
pub struct TopicDataset {
    topics: Vec<Topic>,
}

impl TopicDataset {
    pub fn new(topics: Vec<Topic>) -> Result<Self, DomainError> {
        if topics.is_empty() {
            return Err(DomainError::invalid_input("topic dataset is empty"));
        }

        let mut seen = HashSet::new();
        for topic in &topics {
            if topic.name().trim().is_empty() {
                return Err(DomainError::invalid_input("topic name must not be empty"));
            }
            if topic.content().trim().is_empty() {
                return Err(DomainError::invalid_input(format!(
                    "topic {} has no content",
                    topic.name()
                )));
            }
            if !seen.insert(topic.name()) {
                return Err(DomainError::invalid_input(format!(
                    "duplicate topic name: {}",
                    topic.name()
                )));
            }
        }

        Ok(Self { topics })
    }

    /// Load a dataset from a JSON array of `{"name": ..., "content": ...}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self, DomainError> {
        let raw = std::fs::read_to_string(path)?;
        let topics: Vec<Topic> = serde_json::from_str(&raw).map_err(|e| {
            DomainError::invalid_input(format!("invalid dataset file {}: {e}", path.display()))
        })?;
        Self::new(topics)
    }

    /// The content that ships with the site.
    pub fn builtin() -> Self {
        let topics = BUILTIN_TOPICS
            .iter()
            .map(|(name, content)| Topic::new(*name, *content))
            .collect();
        Self { topics }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.topics.iter().map(Topic::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for TopicDataset {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_TOPICS: &[(&str, &str)] = &[
    (
        "javascript",
        "This is content about JavaScript, a versatile programming language primarily used for web development.\n\
         JavaScript allows developers to create dynamic and interactive web applications.\n\
         Key features include:\n\
         - Asynchronous programming with Promises and async/await.\n\
         - Manipulation of the DOM for client-side interactivity.\n\
         - Wide use in frameworks like React, Angular, and Vue.js.\n\
         JavaScript is essential for building modern, responsive websites and supports both front-end and back-end development through environments like Node.js.\n\
         Examples include creating interactive forms, fetching API data, and animating elements on a webpage.",
    ),
    (
        "python",
        "This is content about Python, a high-level programming language known for its simplicity and readability.\n\
         Python is widely used in fields like data analysis, artificial intelligence, web development, and automation.\n\
         Key features include:\n\
         - A rich standard library that supports various functionalities out of the box.\n\
         - Dynamic typing and an easy-to-read syntax that emphasizes code readability.\n\
         - Popular frameworks like Django and Flask for web development.\n\
         Python is particularly favored for scripting, machine learning, and rapid prototyping.\n\
         Examples include writing a script to automate file handling, developing REST APIs, or training machine learning models with libraries like TensorFlow or scikit-learn.",
    ),
    (
        "golang",
        "This is content about Go (Golang), a statically typed programming language designed for simplicity, concurrency, and performance.\n\
         Go is widely used for building scalable, high-performance applications, especially in distributed systems.\n\
         Key features include:\n\
         - Built-in support for concurrency with goroutines and channels.\n\
         - A minimalistic syntax that makes it easy to learn and use.\n\
         - A strong emphasis on performance and simplicity, with a garbage collector optimized for low latency.\n\
         Go is commonly used in cloud computing, backend development, and microservices.\n\
         Examples include creating RESTful APIs, building CLI tools, and developing container orchestration systems like Kubernetes.",
    ),
    (
        "aboutMe",
        "Earl Cameron is a seasoned software engineer with a distinguished career at leading technology companies. \
         He possesses a unique blend of technical expertise and leadership acumen, enabling him to deliver robust and efficient solutions across various platforms. \
         His adaptability allows him to swiftly master new technologies, and his proficiency spans designing, coding, debugging, and testing. \
         Earl thrives in high-pressure team environments, leveraging his strong interpersonal and communication skills to drive collaborative success. \
         As an educator, he is committed to knowledge sharing and mentorship, nurturing the next generation of tech talent. \
         Passionate about pushing the boundaries of software development, Earl is dedicated to bringing innovation and excellence to every project he undertakes.",
    ),
    (
        "resume",
        "Earl Cameron's resume reflects his extensive experience as a full-stack developer and AI innovator. \
         It details his professional journey, highlighting roles at various tech companies where he led projects and mastered a wide array of technologies. \
         The resume emphasizes his leadership abilities, teaching experience, and commitment to continuous learning and development. Key sections include:\n\
         - **Professional Experience**: Detailed descriptions of roles, responsibilities, and achievements in previous positions.\n\
         - **Education**: Academic background and relevant certifications.\n\
         - **Skills**: Comprehensive list of programming languages, tools, and technologies proficiently utilized.\n\
         - **Projects**: Notable projects that showcase his expertise and contributions.\n\
         - **Publications and Talks**: Contributions to industry knowledge through articles, presentations, or workshops.\n\
         This resume serves as a testament to Earl's qualifications and his dedication to the field of software engineering.",
    ),
    (
        "projects",
        "Earl Cameron's portfolio showcases a diverse array of projects that demonstrate his technical prowess and innovative thinking. \
         Each project is presented with detailed descriptions, highlighting the technologies used and the problems addressed. Notable projects include:\n\
         - **Personal Website**: A fully responsive personal website built using modern web technologies to showcase his portfolio and blog.\n\
         - **Financial Chat Application**: A real-time chat application that integrates financial data APIs, developed with Go and WebSockets.\n\
         - **Git Listener Service**: A service that listens to GitHub events and triggers automated workflows, implemented in Go.\n\
         - **MetaHuman Server**: A server application designed to manage and serve MetaHuman assets for 3D applications.\n\
         Each project includes links to live demos or repositories, providing insight into Earl's development process and technical capabilities.",
    ),
    (
        "blog",
        "Earl Cameron's blog is a platform where he shares his insights on software development, artificial intelligence, industry trends, and personal experiences. \
         The blog features a variety of articles, including:\n\
         - **Technical Tutorials**: Step-by-step guides on programming languages, frameworks, and tools.\n\
         - **Industry Analysis**: Discussions on current trends and future directions in technology.\n\
         - **Personal Reflections**: Narratives on his journey in the tech industry, lessons learned, and career advice.\n\
         - **Project Case Studies**: In-depth looks at specific projects, detailing challenges faced and solutions implemented.\n\
         The blog serves as a resource for fellow developers and tech enthusiasts, fostering a community of learning and engagement.",
    ),
    (
        "contactForm",
        "The contact form on Earl Cameron's website provides a direct and efficient channel for communication. It includes fields for:\n\
         - **Name**: To identify the correspondent.\n\
         - **Email**: To facilitate responses.\n\
         - **Message**: To detail inquiries, collaboration proposals, or feedback.\n\
         The form is designed with user experience in mind, featuring clear instructions and validation to ensure accurate information is provided. \
         Additionally, links to Earl's GitHub and LinkedIn profiles are available, offering alternative methods for professional connection and networking.",
    ),
];
