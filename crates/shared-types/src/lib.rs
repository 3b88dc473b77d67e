pub mod types;

pub use types::{
    BiasAnalysis, BiasCategory, BiasLevel, CategoryFinding, ScreeningReport, TextSpan,
    ToxicityVerdict,
};
