//! Horizontal rule. Carries no properties.

use noteblocks_core::{Block, Result};

pub fn add_line_properties(_block: &mut Block) -> Result<()> {
    Ok(())
}

pub fn render_line_properties(_block: &Block) -> String {
    "---".to_string()
}

pub fn line_property_keys() -> &'static [&'static str] {
    &[]
}

#[cfg(test)]
mod tests {
    use super::*;
    use noteblocks_core::BlockKind;

    #[test]
    fn test_line_renders_rule() {
        let mut block = Block::with_kind(BlockKind::Line);
        add_line_properties(&mut block).unwrap();
        assert!(block.properties.is_empty());
        assert_eq!(render_line_properties(&block), "---");
    }
}
