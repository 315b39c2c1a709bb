//! Project content: records, layout discriminant, tool icons and validation.

use crate::error::CatalogError;
use crate::layout::{self, CardPosition, DEFAULT_CARD_POSITIONS};
use fnv::{FnvHashMap, FnvHashSet};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Geometry {
    Box,
    Icosahedron,
    Torus,
}

/// One object shown by the 3D carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelDescriptor {
    pub label: String,
    pub color: String,
    pub geometry: Geometry,
    pub scale: Option<f32>,
}

impl ModelDescriptor {
    pub fn new(label: impl Into<String>, color: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            geometry,
            scale: None,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn scale_or_default(&self) -> f32 {
        self.scale.unwrap_or(1.0)
    }
}

/// Which modal renderer a project uses, with the data that renderer needs.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Layout {
    #[default]
    Default,
    Gallery {
        images: Vec<String>,
    },
    ThreeD {
        models: Vec<ModelDescriptor>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    Default,
    Gallery,
    ThreeD,
}

impl Layout {
    pub fn kind(&self) -> LayoutKind {
        match self {
            Layout::Default => LayoutKind::Default,
            Layout::Gallery { .. } => LayoutKind::Gallery,
            Layout::ThreeD { .. } => LayoutKind::ThreeD,
        }
    }

    /// Long detail images; empty unless this is a gallery.
    pub fn detail_images(&self) -> &[String] {
        match self {
            Layout::Gallery { images } => images,
            _ => &[],
        }
    }

    /// Carousel models; empty unless this is a 3D layout.
    pub fn models(&self) -> &[ModelDescriptor] {
        match self {
            Layout::ThreeD { models } => models,
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub label: String,
    pub year: String,
    pub client: Option<String>,
    pub color: String,
    pub shadow_color: Option<String>,
    pub image_url: String,
    pub description: String,
    pub tools: Vec<String>,
    pub layout: Layout,
}

impl Project {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        label: impl Into<String>,
        year: impl Into<String>,
        color: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ProjectId(id),
            title: title.into(),
            label: label.into(),
            year: year.into(),
            client: None,
            color: color.into(),
            shadow_color: None,
            image_url: image_url.into(),
            description: description.into(),
            tools: Vec::new(),
            layout: Layout::Default,
        }
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn with_shadow_color(mut self, color: impl Into<String>) -> Self {
        self.shadow_color = Some(color.into());
        self
    }

    pub fn with_tools(mut self, tools: &[&str]) -> Self {
        self.tools = tools.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Colour used for the card glow.
    pub fn glow_color(&self) -> &str {
        self.shadow_color.as_deref().unwrap_or(&self.color)
    }
}

/// Projects plus their index-aligned card placements.
#[derive(Clone, Debug)]
pub struct Catalog {
    projects: Vec<Project>,
    positions: Vec<CardPosition>,
}

impl Catalog {
    /// Validate and wrap externally supplied content.
    pub fn new(projects: Vec<Project>, positions: Vec<CardPosition>) -> Result<Self, CatalogError> {
        if projects.len() != positions.len() {
            return Err(CatalogError::PositionCountMismatch {
                projects: projects.len(),
                positions: positions.len(),
            });
        }
        let mut seen = FnvHashSet::default();
        for p in &projects {
            if !seen.insert(p.id) {
                log::warn!("[catalog] duplicate project id {}", p.id);
                return Err(CatalogError::DuplicateId(p.id));
            }
        }
        layout::validate_positions(&positions)?;
        Ok(Self {
            projects,
            positions,
        })
    }

    /// The eight projects shipped with the site.
    pub fn builtin() -> Self {
        Self {
            projects: builtin_projects(),
            positions: DEFAULT_CARD_POSITIONS.to_vec(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn positions(&self) -> &[CardPosition] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn index_of(&self, id: ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    pub fn cards(&self) -> impl Iterator<Item = (&Project, &CardPosition)> {
        self.projects.iter().zip(self.positions.iter())
    }
}

const PROJECT_1_LONG_IMAGE: &str = "https://cdn.jsdelivr.net/gh/jayneysil520-dev/jayneysil@main/%E6%89%80%E6%9C%89IP%E7%9A%84%E4%BD%8D%E7%BD%AE1-11.png";
const PROJECT_2_LONG_IMAGE: &str = "https://cdn.jsdelivr.net/gh/jayneysil520-dev/jayneysil@main/%E5%BE%97%E5%8A%9B%E8%9B%8B%E4%BB%94%E9%95%BF%E5%9B%BE1-11.png";

fn builtin_projects() -> Vec<Project> {
    vec![
        Project::new(
            1,
            "得力欧美市场IP形象设计",
            "IP IMAGE DESIGN",
            "2025",
            "#FF7F27",
            "https://cdn.jsdelivr.net/gh/jayneysil520-dev/jayneysil@main/1-1.png",
            "Creating a magical land named \"Heart Language Forest\" for Deli's European and American markets.",
        )
        .with_client("DELI")
        .with_tools(&["Jimeng", "PS", "Figma", "Blender"])
        .with_layout(Layout::Gallery {
            images: vec![PROJECT_1_LONG_IMAGE.into(), PROJECT_1_LONG_IMAGE.into()],
        }),
        Project::new(
            2,
            "蛋仔派对·得力创作大赛视觉设计",
            "VISUAL DESIGN",
            "2025",
            "#FFA500",
            "https://cdn.jsdelivr.net/gh/jayneysil520-dev/jayneysil@main/2-1.png",
            "An immersive digital coastline experience bringing the ocean breeze.",
        )
        .with_tools(&["Figma", "Jimeng", "PS", "Blender"])
        .with_layout(Layout::Gallery {
            images: vec![PROJECT_2_LONG_IMAGE.into()],
        }),
        Project::new(
            3,
            "猿辅导运营设计",
            "VISUAL DESIGN",
            "2022",
            "#4DA6FF",
            "https://cdn.jsdelivr.net/gh/jayneysil520-dev/jayneysil@main/%E7%8C%BF%E8%BE%85%E5%AF%BC%E5%B0%81%E9%9D%A2.png",
            "Cyberpunk aesthetic visual identity system for a futuristic fashion label.",
        )
        .with_shadow_color("#4DA6FF")
        .with_tools(&["PS", "AI", "C4D"]),
        Project::new(
            4,
            "卫岗形象设计之LoRA炼制",
            "LOGO / IP DESIGN",
            "2022",
            "#EA2F2F",
            "https://raw.githubusercontent.com/jayneysil520-dev/jayneysil/refs/heads/main/%E5%8D%AB%E5%B2%97%E5%B0%81%E9%9D%A2hero.jpg",
            "Rhythm of city life captured in a rhythmic event discovery application.",
        )
        .with_tools(&["Figma", "LibLib", "PS"]),
        Project::new(
            5,
            "Nature Sync",
            "IOT INTERFACE",
            "2021",
            "#66DD88",
            "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?q=80&w=1000&auto=format&fit=crop",
            "Smart home interface connecting organic patterns with digital control.",
        )
        .with_tools(&["Figma", "C4D"]),
        Project::new(
            6,
            "Abstract Void",
            "MOTION ART",
            "2021",
            "#AA88EE",
            "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=1000&auto=format&fit=crop",
            "Experimental motion graphics exploring the concept of digital minimalism.",
        )
        .with_tools(&["C4D", "AE", "PS"]),
        Project::new(
            7,
            "Glass Horizons",
            "WEB AWARDS",
            "2020",
            "#4ECDC4",
            "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?q=80&w=1000&auto=format&fit=crop",
            "Portfolio site featuring heavy use of glassmorphism and depth effects.",
        )
        .with_tools(&["React", "Figma"])
        .with_layout(Layout::ThreeD {
            models: vec![
                ModelDescriptor::new("PRISM", "#4ECDC4", Geometry::Icosahedron),
                ModelDescriptor::new("FRAME", "#A0E7E5", Geometry::Box).with_scale(0.9),
                ModelDescriptor::new("HALO", "#FFD166", Geometry::Torus),
            ],
        }),
        Project::new(
            8,
            "Silent Echo",
            "AUDIO VIZ",
            "2020",
            "#FF0055",
            "https://images.unsplash.com/photo-1515405295579-ba7f45403022?q=80&w=1000&auto=format&fit=crop",
            "Visualizing sound waves in real-time using WebAudio API and Canvas.",
        )
        .with_tools(&["ThreeJS", "Blender"]),
    ]
}

/// Tool name → icon URL.
#[derive(Clone, Debug)]
pub struct ToolIcons {
    map: FnvHashMap<&'static str, &'static str>,
}

impl ToolIcons {
    pub fn builtin() -> Self {
        let entries: [(&'static str, &'static str); 11] = [
            ("Figma", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/figma/figma-original.svg"),
            ("PS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/photoshop/photoshop-plain.svg"),
            ("AI", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/illustrator/illustrator-plain.svg"),
            ("AE", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/aftereffects/aftereffects-original.svg"),
            ("Blender", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/blender/blender-original.svg"),
            ("C4D", "https://cdn.jsdelivr.net/gh/jayneysil520-dev/jayneysil@main/1197px-C4D_Logo.png"),
            ("React", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"),
            ("ThreeJS", "https://global.discourse-cdn.com/standard17/uploads/threejs/original/2X/e/e4f86d2200d2d35c30f7b1494e96b9595ebc2751.png"),
            ("Jimeng", "https://cdn.jsdelivr.net/gh/jayneysil520-dev/jayneysil@main/%E5%8D%B3%E6%A2%A6icon.png"),
            ("Pinterest", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/pinterest/pinterest-original.svg"),
            ("LibLib", "https://cdn.jsdelivr.net/gh/jayneysil520-dev/jayneysil@main/LibLib.png"),
        ];
        Self {
            map: entries.into_iter().collect(),
        }
    }

    /// Icon URL for `tool`, or an empty string when unknown.
    pub fn url(&self, tool: &str) -> &str {
        self.map.get(tool).copied().unwrap_or("")
    }
}

impl Default for ToolIcons {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parse `#RRGGBB` / `#RGB` into 0..1 RGB.
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |h: &str| u8::from_str_radix(h, 16).ok().map(|v| v as f32 / 255.0);
    match hex.len() {
        6 => Some([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ]),
        3 => {
            let short = |i: usize| {
                let c = &hex[i..i + 1];
                channel(&format!("{c}{c}"))
            };
            Some([short(0)?, short(1)?, short(2)?])
        }
        _ => None,
    }
}
