pub mod ai;
pub mod catalog;
pub mod planner;
pub mod relay;
pub mod render;
pub mod script;
pub mod selection;
pub mod types;

pub use ai::{
    generate_meal_plan, AiClient, AiConfig, AiError, ChatMessage, ChatRequest, ChatResponse,
    ConfigError, FakeAiClient, OpenRouterClient, Role, Usage, NO_SCRIPT_FALLBACK,
};
pub use catalog::{is_catalog_item, CATALOG};
pub use planner::{GenerationResult, MealPlanner, Phase, SubmitError};
pub use relay::{HttpRelay, MealPlanRelay, RelayError};
pub use render::{render_plan, step_cards, StepCard};
pub use script::{parse_script, ParsedScript, Step};
pub use selection::SelectionMap;
pub use types::{CatalogResponse, GenerateRequest, GenerateResponse};
