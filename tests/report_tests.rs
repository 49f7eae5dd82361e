use hashchain::ledger::{Chain, Difficulty, DIGEST_HEX_LEN};
use hashchain::report::{render, render_json, render_text, OutputFormat, RecordView};

fn sample_chain() -> Chain {
    let mut chain = Chain::with_difficulty(Difficulty::new(1).unwrap());
    chain.append("Block 1 Data");
    chain.append("Block 2 Data");
    chain.append("Block 3 Data");
    chain
}

#[test]
fn text_lists_every_field_of_every_record() {
    let chain = sample_chain();
    let text = render_text(chain.records());

    assert_eq!(text.matches("Sequence: ").count(), 4);
    assert!(text.contains("Sequence: 0\n"));
    assert!(text.contains("Payload: Genesis Block\n"));
    assert!(text.contains("Payload: Block 3 Data\n"));
    assert!(text.contains(&format!("Previous: {}\n", "0".repeat(DIGEST_HEX_LEN))));

    for record in chain.records() {
        assert!(text.contains(&format!("Identity: {}\n", record.identity())));
        assert!(text.contains(&format!("Nonce: {}\n", record.nonce())));
    }
}

#[test]
fn json_views_preserve_linkage() {
    let chain = sample_chain();
    let json = render_json(chain.records()).unwrap();

    let views: Vec<RecordView> = serde_json::from_str(&json).unwrap();
    assert_eq!(views.len(), 4);

    for (i, view) in views.iter().enumerate() {
        assert_eq!(view.sequence, i as u64);
        assert_eq!(view.identity.len(), DIGEST_HEX_LEN);
        assert!(view.identity.starts_with('0'));
        assert!(view.created_at.ends_with('Z'));
        if i > 0 {
            assert_eq!(view.previous, views[i - 1].identity);
        }
    }
    assert_eq!(views[2].payload, "Block 2 Data");
}

#[test]
fn binary_payloads_render_lossily() {
    let mut chain = Chain::with_difficulty(Difficulty::NONE);
    chain.append([0x66u8, 0x6F, 0xFF]);

    let view = RecordView::from(&chain.records()[1]);
    assert_eq!(view.payload, "fo\u{FFFD}");
}

#[test]
fn render_dispatches_on_format() {
    let chain = sample_chain();

    let text = render(chain.records(), OutputFormat::Text).unwrap();
    assert!(text.starts_with("Sequence: 0\n"));

    let json = render(chain.records(), OutputFormat::Json).unwrap();
    assert!(json.trim_start().starts_with('['));
}
