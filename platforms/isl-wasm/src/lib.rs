use isl_gloss::{GlossPipeline, Lexicon, TaggedToken, Tense};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The structured response sent back to JavaScript
#[derive(Debug, Serialize)]
pub struct GlossReport {
    pub gloss: Vec<String>,
    pub text: String,
    pub tense: Tense,
    pub tree: String,
    pub leaves: Vec<String>,
    pub moved: usize,
    pub pruned: usize,
}

/// The browser has no CoreNLP server, so the page supplies the parse and
/// the tags it obtained elsewhere.
#[wasm_bindgen]
pub struct GlossEngine {
    pipeline: GlossPipeline,
}

#[wasm_bindgen]
impl GlossEngine {
    /// `lexicon` is a compiled lexicon archive (loaded via fetch() in JS);
    /// empty selects the built-in English lexicon.
    #[wasm_bindgen(constructor)]
    pub fn new(lexicon: Vec<u8>) -> Result<GlossEngine, JsError> {
        let lexicon = load_lexicon(&lexicon).map_err(|e| JsError::new(&e))?;
        Ok(Self { pipeline: GlossPipeline::new(&lexicon) })
    }

    /// `tree` is a bracketed constituency parse; `tags` an array of
    /// `{ text, tag }` objects for the same sentence.
    #[wasm_bindgen(js_name = convertParsed)]
    pub fn convert_parsed(&self, tree: &str, tags: JsValue) -> Result<JsValue, JsError> {
        let tags: Vec<TaggedToken> = if tags.is_undefined() || tags.is_null() {
            Vec::new()
        } else {
            serde_wasm_bindgen::from_value(tags).map_err(|e| JsError::new(&e.to_string()))?
        };
        let report = self.report(tree, &tags).map_err(|e| JsError::new(&e))?;
        serde_wasm_bindgen::to_value(&report).map_err(|e| JsError::new(&e.to_string()))
    }
}

impl GlossEngine {
    fn report(&self, tree: &str, tags: &[TaggedToken]) -> Result<GlossReport, String> {
        let mut tree = isl_parser::parse_tree(tree).map_err(|e| e.to_string())?;
        let report = self.pipeline.run_tagged(&mut tree, tags);

        Ok(GlossReport {
            text: report.gloss.to_string(),
            gloss: report.gloss.into_tokens(),
            tense: report.tense,
            tree: report.tree,
            leaves: report.leaves,
            moved: report.reorder.moved,
            pruned: report.pruned,
        })
    }
}

fn load_lexicon(bytes: &[u8]) -> Result<Lexicon, String> {
    if bytes.is_empty() {
        return Ok(Lexicon::english());
    }
    Lexicon::from_archive_bytes(bytes).map_err(|e| e.to_string())
}
