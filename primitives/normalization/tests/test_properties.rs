use normalization::*;
use serde_json::{json, Value};

#[derive(Debug, Default, Clone, PartialEq)]
struct Widget {
    id: String,
    label: String,
    level: i32,
}

type Field = FieldDef<Widget>;

static WIDGET_FIELDS: &[Field] = &[
    Field::id("widgetid", |w| w.id.as_str(), |w, v| w.id = v).omit_empty(),
    Field::text("label", |w| w.label.as_str(), |w, v| w.label = v),
    Field::code("level", |w| w.level, |w, v| w.level = v),
];

impl Record for Widget {
    const KIND: &'static str = "widget";
    const ID_FIELD: &'static str = "widgetid";

    fn fields() -> &'static [FieldDef<Self>] { WIDGET_FIELDS }

    fn id(&self) -> &str { &self.id }

    fn set_id(&mut self, id: String) { self.id = id }
}

fn widgets(ids: &[&str]) -> Vec<Widget> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| Widget { id: id.to_string(), label: format!("w{}", i), level: i as i32 })
        .collect()
}

fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn test_create_assigns_ids_positionally() {
    for ids in permutations(&["101", "0", " ", "9007199254740993"]) {
        let ids = &ids[..3];
        let mut records = widgets(&["", "", ""]);
        let result = json!({ "widgetids": ids });
        assign_created(&mut records, &result, "widgetids").expect("three ids for three records");
        for (record, id) in records.iter().zip(ids) {
            assert_eq!(record.id, *id);
        }
    }
}

#[test]
fn test_create_with_mapping_shape() {
    let mut records = widgets(&["", "", ""]);
    let result = json!({"widgetids": {"0": "7", "1": 8, "2": "9"}});
    assign_created(&mut records, &result, "widgetids").expect("mapping shape accepted");
    let ids: Vec<&str> = records.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["7", "8", "9"]);
}

#[test]
fn test_create_count_mismatch_leaves_records_untouched() {
    let original = widgets(&["", "", ""]);
    for result in [json!({"widgetids": ["1", "2"]}), json!({"widgetids": {"0": "1", "1": "2"}})] {
        let mut records = original.clone();
        let err = assign_created(&mut records, &result, "widgetids").expect_err("two for three");
        assert_eq!(err, NormalizationError::CountMismatch { expected: 3, actual: 2 });
        assert_eq!(records, original);
    }
}

#[test]
fn test_delete_clears_on_matching_count_only() {
    let original = widgets(&["11", "12", "13"]);
    let k = original.len();

    let echoed: Vec<Value> = vec![json!("99"), json!("98"), json!("97")];
    let mapped = json!({"0": "11", "1": "12", "2": "13"});
    for ids in [Value::Array(echoed), mapped] {
        let mut records = original.clone();
        clear_deleted(&mut records, &json!({ "widgetids": ids }), "widgetids")
            .expect("count matches");
        assert!(records.iter().all(|w| w.id.is_empty() && !w.is_persisted()));
        assert_eq!(records[2].label, "w2");
    }

    for reported in [k - 1, k + 1] {
        let ids: Vec<String> = (0..reported).map(|i| i.to_string()).collect();
        for raw in [json!(ids.clone()), Value::Object(ids.iter().map(|i| (i.clone(), json!(i))).collect())]
        {
            let mut records = original.clone();
            let err = clear_deleted(&mut records, &json!({ "widgetids": raw }), "widgetids")
                .expect_err("count differs");
            assert_eq!(err, NormalizationError::CountMismatch { expected: k, actual: reported });
            assert_eq!(records, original);
        }
    }
}

#[test]
fn test_round_trip_preserves_values() {
    let raw = json!([
        {"widgetid": "1", "label": "first", "level": "3"},
        {"widgetid": 2, "label": "second", "level": 5, "extra": [1, 2]}
    ]);
    let decoded: Collection<Widget> = normalize(&raw).expect("decodes");
    let encoded = Value::Array(
        decoded.iter().map(|w| Value::Object(encode_record(w, Encoding::Full))).collect(),
    );
    assert_eq!(
        encoded,
        json!([
            {"widgetid": "1", "label": "first", "level": 3},
            {"widgetid": "2", "label": "second", "level": 5}
        ])
    );
    let again: Collection<Widget> = normalize(&encoded).expect("decodes again");
    assert_eq!(again, decoded);
}

#[test]
fn test_numeric_string_accepted_and_garbage_rejected() {
    let ok: Collection<Widget> = normalize(&json!([{"level": "3"}])).expect("numeric string");
    assert_eq!(ok[0].level, 3);

    let err = normalize::<Widget>(&json!([{"level": "abc"}])).expect_err("not numeric");
    match err {
        NormalizationError::FieldCoercion { field, value, .. } => {
            assert_eq!(field, "level");
            assert_eq!(value, json!("abc"));
        }
        other => panic!("expected FieldCoercion, got {:?}", other),
    }
}

#[test]
fn test_by_id_keeps_unique_records() {
    let collection = Collection::new(widgets(&["3", "1", "2"]));
    assert_eq!(collection.ids(), vec!["3", "1", "2"]);
    let map = collection.by_id();
    assert_eq!(map.len(), 3);
    assert_eq!(map["1"].label, "w1");
    assert_eq!(map["3"].label, "w0");
}

#[test]
fn test_try_by_id_reports_duplicate() {
    let collection = Collection::new(widgets(&["3", "4", "3"]));
    let err = collection.try_by_id().expect_err("3 is repeated");
    assert_eq!(err, DuplicateKeyError { key: "3".to_string() });
}

#[test]
#[should_panic(expected = "duplicate key 7")]
fn test_by_id_panics_on_duplicate() {
    let collection = Collection::new(widgets(&["7", "7"]));
    let _ = collection.by_id();
}
