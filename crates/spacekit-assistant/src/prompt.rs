//! Instruction text sent to the generative service.

/// Brief used when the user leaves the prompt blank.
pub const DEFAULT_BRIEF: &str =
    "Modern open office with lounge, meeting pod, and kitchenette (20m x 12m)";

const INSTRUCTIONS: &str = r##"You are an expert interior designer creating parametric data for a CAD-like tool.
Return STRICT JSON that matches:
{
  "elements": [
    { "id": "ext-1", "type": "wall", "color": "#D6D6D6", "completed": true, "points": [{ "x": -10, "y": -6 }, { "x": 10, "y": -6 }] }
  ],
  "furniture": [
    { "id": "f-1", "name": "Sectional Sofa", "category": "Seating", "type": "Modern Sofa", "color": "#546E7A", "position": { "x": -2, "y": 0, "z": 3 }, "rotation": { "x": 0, "y": 0, "z": 0 }, "scale": { "x": 2, "y": 1, "z": 1 } }
  ]
}
Rules:
- Use meters and keep coordinates between -12 and 12.
- Provide a closed loop of perimeter walls (at least four entries with matching endpoints) plus any helpful partitions.
- Doors/windows must reference the wall they cut using { "wallId": "<wall id>", "segmentIndex": <index>, "t": <0-1> } and include width/height (meters). Windows also need sill height.
- All walls should include "completed": true and at least two points.
- Limit furniture to 20 items and keep y rotation only (x/z = 0).
- Use descriptive hex colors (#RRGGBB).
- No markdown, prose, or explanations, just raw JSON.
Design brief: "##;

/// Builds the full instruction text for `brief`, substituting the default when blank.
pub fn build_instructions(brief: &str) -> String {
    let brief = brief.trim();
    let brief = if brief.is_empty() { DEFAULT_BRIEF } else { brief };
    format!("{}{}", INSTRUCTIONS, brief)
}
