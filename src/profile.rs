//! Static site content: who, what they shipped, and where to find them.

pub struct Links {
	pub linkedin: &'static str,
	pub github: &'static str,
	pub leetcode: &'static str,
}

pub struct Profile {
	pub name: &'static str,
	pub title: &'static str,
	pub email: &'static str,
	pub links: Links,
	pub boot_intro: &'static [&'static str],
}

impl Profile {
	/// `AHMED.sys` style brand used by the nav bar.
	pub fn brand(&self) -> String {
		let first = self.name.split_whitespace().next().unwrap_or(self.name);
		format!("{}.sys", first.to_uppercase())
	}

	pub fn mailto(&self) -> String {
		format!("mailto:{}", self.email)
	}
}

pub const PROFILE: Profile = Profile {
	name: "Ahmed Shehab",
	title: "Software Engineer — Backend & Systems Specialist",
	email: "ashehab.biomedeng@gmail.com",
	links: Links {
		linkedin: "https://linkedin.com/in/ahmed-shehab-engineering",
		github: "https://github.com/AhmedShehab1",
		leetcode: "https://leetcode.com/u/Ahmed_Abdelghafar/",
	},
	boot_intro: &[
		"$ ssh ahmed@portfolio.sys",
		"Authenticating... ✓",
		"Loading profile...",
		"",
		"┌─────────────────────────────────────────────┐",
		"│  AHMED SHEHAB — Backend & Systems Engineer  │",
		"│  Uptime: 3+ years  |  Status: ONLINE        │",
		"│  Specialization: Distributed Systems,       │",
		"│  Concurrency, High-Performance APIs         │",
		"└─────────────────────────────────────────────┘",
		"",
		"$ cat /etc/motd",
		"→ Building resilient systems, one microservice at a time.",
		"→ Type 'help' or scroll to explore.",
	],
};

// Dependencies (skills)

pub struct Dependency {
	pub category: &'static str,
	pub items: &'static [&'static str],
	pub icon: &'static str,
}

impl Dependency {
	/// Faux `install` arguments: the first three items, elided after that.
	pub fn install_line(&self) -> String {
		let head = self.items.iter().take(3).copied().collect::<Vec<_>>().join(" ");
		if self.items.len() > 3 {
			format!("{} ...", head)
		} else {
			head
		}
	}
}

pub const DEPENDENCIES: &[Dependency] = &[
	Dependency {
		category: "Languages",
		items: &["C", "Python", "JavaScript", "TypeScript", "Java"],
		icon: "code-2",
	},
	Dependency {
		category: "Frameworks",
		items: &[
			"Django",
			"Flask",
			"Frappe",
			"Express",
			"Spring Boot",
			"React",
			"FastAPI",
			"Bull",
		],
		icon: "layers",
	},
	Dependency {
		category: "Databases & Tools",
		items: &[
			"MySQL",
			"PostgreSQL",
			"MongoDB",
			"Redis",
			"Elasticsearch",
			"Git",
			"Docker",
		],
		icon: "database",
	},
	Dependency {
		category: "DevOps & Monitoring",
		items: &[
			"Nginx",
			"Gunicorn",
			"HAProxy",
			"DataDog",
			"Prometheus",
			"Grafana",
			"CI/CD",
			"GitHub Actions",
		],
		icon: "server",
	},
	Dependency {
		category: "Architecture",
		items: &[
			"REST APIs",
			"Unit Testing",
			"TDD",
			"Agile",
			"Microservices",
			"System Design",
		],
		icon: "cpu",
	},
];

// Runtime history (experience)

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
	Completed,
}

impl RunStatus {
	pub fn label(self) -> &'static str {
		match self {
			RunStatus::Completed => "completed",
		}
	}
}

pub struct RuntimeEntry {
	pub role: &'static str,
	pub org: &'static str,
	pub location: &'static str,
	pub period: &'static str,
	pub highlights: &'static [&'static str],
	pub status: RunStatus,
}

pub const RUNTIME_HISTORY: &[RuntimeEntry] = &[
	RuntimeEntry {
		role: "Backend Engineer Intern",
		org: "Suez Canal Bank",
		location: "Cairo, Egypt",
		period: "Jul 2025 – Sep 2025",
		highlights: &[
			"Spring Boot · Java · PostgreSQL — built high-throughput banking APIs.",
			"Implemented DB indexing strategies improving query performance.",
			"Integrated Prometheus + Grafana for real-time system monitoring.",
			"Conducted performance & scalability testing on critical endpoints.",
		],
		status: RunStatus::Completed,
	},
	RuntimeEntry {
		role: "Backend Developer Intern",
		org: "Homains",
		location: "Remote",
		period: "Nov 2024 – Mar 2025",
		highlights: &[
			"Frappe / Python on ERPNext — feature implementation & bug fixes.",
			"Wrote unit tests and integrated CI/CD via GitHub Actions.",
			"Contributed to production-grade ERP system reliability.",
		],
		status: RunStatus::Completed,
	},
	RuntimeEntry {
		role: "Full-Stack Developer",
		org: "Raseel Medical Center",
		location: "Riyadh, Saudi Arabia",
		period: "2024",
		highlights: &[
			"Flask + Elasticsearch + MySQL — clinical appointment system.",
			"Designed RBAC-based auth & mobile-first MVT architecture.",
			"Integrated Elasticsearch search (≈40% faster response).",
			"Maintained session security, API design & code maintainability.",
		],
		status: RunStatus::Completed,
	},
	RuntimeEntry {
		role: "Software Engineering Program",
		org: "ALX / Holberton School",
		location: "Online",
		period: "Jul 2023 – Jan 2025",
		highlights: &[
			"Intensive project-driven program: algorithms, data structures, system design.",
			"RESTful APIs, relational & NoSQL databases, testing & TDD.",
			"Containerization (Docker), CI/CD, monitoring & debugging.",
			"Collaborative code reviews and production-focused deliverables.",
		],
		status: RunStatus::Completed,
	},
];

// Service registry (projects)

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
	Online,
	Archived,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceCategory {
	Backend,
	Fullstack,
	Systems,
	Tools,
}

impl ServiceCategory {
	pub const ALL: [ServiceCategory; 4] = [
		ServiceCategory::Backend,
		ServiceCategory::Fullstack,
		ServiceCategory::Systems,
		ServiceCategory::Tools,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			ServiceCategory::Backend => "backend",
			ServiceCategory::Fullstack => "fullstack",
			ServiceCategory::Systems => "systems",
			ServiceCategory::Tools => "tools",
		}
	}
}

pub struct Service {
	pub name: &'static str,
	pub description: &'static str,
	pub tech: &'static [&'static str],
	pub status: ServiceStatus,
	pub uptime: &'static str,
	pub repo: Option<&'static str>,
	pub category: ServiceCategory,
}

pub const SERVICES: &[Service] = &[
	Service {
		name: "Signal Equalizer",
		description: "Full-stack signal processing platform — STFT-based frequency equalization, real-time spectrum/spectrogram visualizations, AI source separation (Hybrid Demucs, DPRNN), Web Audio API.",
		tech: &["React", "TypeScript", "FastAPI", "Python", "DSP", "AI/ML"],
		status: ServiceStatus::Online,
		uptime: "99.8%",
		repo: None,
		category: ServiceCategory::Fullstack,
	},
	Service {
		name: "Computational Wave Lab",
		description: "High-performance DSP toolkit — real-time FFT/IFFT, phased array beamforming, Web Workers for multi-threaded computation, OffscreenCanvas rendering.",
		tech: &[
			"React",
			"TypeScript",
			"Web Workers",
			"DSP",
			"OffscreenCanvas",
			"OOP",
		],
		status: ServiceStatus::Online,
		uptime: "99.5%",
		repo: None,
		category: ServiceCategory::Systems,
	},
	Service {
		name: "Signal Viewer",
		description: "Multi-domain signal analysis platform with real-time visualization, AI-driven classification & abnormality detection (TensorFlow), multi-view playback.",
		tech: &["React", "TensorFlow", "Signal Processing", "Real-time Viz"],
		status: ServiceStatus::Online,
		uptime: "99.2%",
		repo: None,
		category: ServiceCategory::Fullstack,
	},
	Service {
		name: "Redis Clone",
		description: "In-memory key-value store built from scratch — PING, ECHO, SET/GET, CONFIG, OOP architecture, RDB persistence (planned), replication (planned).",
		tech: &["Python", "OOP", "Networking", "Data Structures"],
		status: ServiceStatus::Online,
		uptime: "98.7%",
		repo: Some("https://github.com/AhmedShehab1/Redis_Clone"),
		category: ServiceCategory::Systems,
	},
	Service {
		name: "LittleLemon Restaurant",
		description: "Production-grade REST API with authentication, menu management, reservation system, Swagger docs, Dockerized deployment.",
		tech: &["Django", "DRF", "Djoser", "Swagger", "Docker"],
		status: ServiceStatus::Online,
		uptime: "99.9%",
		repo: Some("https://github.com/MazenAtlam/LittleLemon"),
		category: ServiceCategory::Backend,
	},
	Service {
		name: "File Manager API",
		description: "Secure file management service — JWT auth, file upload/download, image processing pipeline, Redis caching layer.",
		tech: &["Node.js", "MongoDB", "Redis", "Express"],
		status: ServiceStatus::Online,
		uptime: "99.4%",
		repo: Some("https://github.com/AhmedShehab1/alx-files_manager"),
		category: ServiceCategory::Backend,
	},
	Service {
		name: "AdFriend Extension",
		description: "Chrome extension that replaces ads with inspirational quotes — MutationObserver-based DOM scanning, Chrome Extension APIs.",
		tech: &["JavaScript", "Chrome APIs", "MutationObserver", "HTML/CSS"],
		status: ServiceStatus::Online,
		uptime: "97.5%",
		repo: None,
		category: ServiceCategory::Tools,
	},
	Service {
		name: "Smart Home Controller",
		description: "Embedded systems project — Atmega32 + Bluetooth smart-home control: lighting, security, sensor integration (LDR, LM35), PWM motor control, timer automation.",
		tech: &["C", "Atmega32", "Bluetooth", "PWM", "Embedded"],
		status: ServiceStatus::Archived,
		uptime: "N/A",
		repo: None,
		category: ServiceCategory::Systems,
	},
];

pub const CERTIFICATIONS: &[&str] = &[
	"ALX Software Engineering Certificate",
	"Meta Backend Developer Professional Certificate",
	"MongoDB Certified Developer",
	"SQL Professional Certificate",
	"Embedded Systems Diploma",
	"Software Architecture for Big Data (L2)",
	"English Certificate — EF SET",
];

// Command palette entries

pub struct CommandItem {
	pub label: &'static str,
	pub shortcut: &'static str,
	/// Either an in-page `#anchor` or an absolute URL.
	pub target: &'static str,
	pub icon: &'static str,
}

pub const COMMANDS: &[CommandItem] = &[
	CommandItem {
		label: "Go to GitHub",
		shortcut: "⌘ G",
		target: "https://github.com/AhmedShehab1",
		icon: "github",
	},
	CommandItem {
		label: "Go to LinkedIn",
		shortcut: "⌘ L",
		target: "https://linkedin.com/in/ahmed-shehab-engineering",
		icon: "linkedin",
	},
	CommandItem {
		label: "Go to LeetCode",
		shortcut: "⌘ K",
		target: "https://leetcode.com/u/Ahmed_Abdelghafar/",
		icon: "code-2",
	},
	CommandItem {
		label: "Send Email",
		shortcut: "⌘ E",
		target: "mailto:ashehab.biomedeng@gmail.com",
		icon: "mail",
	},
	CommandItem {
		label: "Jump to Services",
		shortcut: "⌘ S",
		target: "#services",
		icon: "server",
	},
	CommandItem {
		label: "Jump to Runtime History",
		shortcut: "⌘ R",
		target: "#runtime",
		icon: "terminal",
	},
	CommandItem {
		label: "Jump to Dependencies",
		shortcut: "⌘ D",
		target: "#dependencies",
		icon: "package",
	},
];

/// Small glyph standing in for an icon name.
pub fn glyph(icon: &str) -> &'static str {
	match icon {
		"github" => "⌥",
		"linkedin" => "in",
		"code-2" => "</>",
		"mail" => "@",
		"server" => "▤",
		"terminal" => ">_",
		"package" => "▣",
		"layers" => "≡",
		"database" => "◍",
		"cpu" => "▦",
		_ => ">_",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn brand_uses_upper_cased_first_name() {
		assert_eq!(PROFILE.brand(), "AHMED.sys");
		assert_eq!(PROFILE.mailto(), "mailto:ashehab.biomedeng@gmail.com");
	}

	#[test]
	fn install_line_elides_after_three_items() {
		assert_eq!(DEPENDENCIES[0].install_line(), "C Python JavaScript ...");

		let short = Dependency {
			category: "x",
			items: &["a", "b", "c"],
			icon: "cpu",
		};
		assert_eq!(short.install_line(), "a b c");
	}

	#[test]
	fn runtime_history_entries_are_completed() {
		assert!(RUNTIME_HISTORY.iter().all(|e| e.status.label() == "completed"));
	}

	#[test]
	fn mailto_command_matches_profile_email() {
		let mail = COMMANDS.iter().find(|c| c.icon == "mail").unwrap();
		assert_eq!(mail.target, PROFILE.mailto());
	}
}
