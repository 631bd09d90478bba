use crate::TreeItem;

/// Sample tree for trying out the widget
pub fn demo_items() -> Vec<TreeItem<String>> {
    let leaf = |label: &str| TreeItem::new_leaf(label.to_string());

    vec![
        leaf("a"),
        TreeItem::new(
            "b".to_string(),
            vec![
                leaf("c"),
                TreeItem::new("d".to_string(), vec![leaf("e"), leaf("f")]),
                leaf("g"),
            ],
        ),
        leaf("h"),
        TreeItem::new(
            "i".to_string(),
            vec![
                leaf("j"),
                TreeItem::new(
                    "k".to_string(),
                    vec![TreeItem::new("l".to_string(), vec![leaf("m"), leaf("n")])],
                ),
                leaf("multi\nline"),
            ],
        ),
        leaf("o"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_shape() {
        let items = demo_items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[1].children().len(), 3);
        assert_eq!(items[3].children()[2].height(), 2);
    }
}
