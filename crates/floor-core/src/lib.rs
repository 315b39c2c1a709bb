pub mod camera;
pub mod carousel;
pub mod catalog;
pub mod constants;
pub mod depth;
pub mod easing;
pub mod error;
pub mod gallery;
pub mod hover;
pub mod layout;
pub mod marquee;
pub mod modal;
pub mod pointer;
pub mod presence;
pub mod preview;
pub mod scroll;
pub mod section;
pub mod spring;

pub use camera::Camera;
pub use carousel::{Carousel, CarouselFrame, ObjectPose, WheelAccumulator};
pub use catalog::{Catalog, Geometry, Layout, LayoutKind, ModelDescriptor, Project, ProjectId, ToolIcons};
pub use error::CatalogError;
pub use hover::{HoverArbitrator, HoverState};
pub use modal::{ClickTarget, ModalContent, ModalController};
pub use presence::{ExitMode, Presence, PresenceEvent};
pub use section::{Section, SectionEvent, SectionFrame};
