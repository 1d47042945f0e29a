mod classify;

pub use classify::{
    classify_assets, image_declaration, json_declaration, manifest_line, AssetsResult,
    MANIFEST_HEADER,
};
