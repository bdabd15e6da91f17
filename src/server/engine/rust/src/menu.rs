/* src/server/engine/rust/src/menu.rs */

use std::collections::{HashMap, HashSet};

use storefront_injector::MenuNode;

use crate::setting::PageSetting;

/// Order gap used when a page is dropped next to a sibling.
pub const PLACEMENT_STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
  Before,
  After,
}

/// Order value for a page dropped before or after a sibling with
/// `target_order`. Repeated drops at the same spot collide once the step is
/// exhausted; orders are not renormalized here.
pub fn placement_order(placement: Placement, target_order: f64) -> f64 {
  match placement {
    Placement::Before => target_order - PLACEMENT_STEP,
    Placement::After => target_order + PLACEMENT_STEP,
  }
}

fn home_node() -> MenuNode {
  MenuNode {
    label: "Home".into(),
    route: "/".into(),
    order: -1.0,
    ..MenuNode::default()
  }
}

fn sort_level(nodes: &mut [MenuNode]) {
  nodes.sort_by(|a, b| a.order.total_cmp(&b.order));
  for node in nodes {
    sort_level(&mut node.children);
  }
}

/// Build the navigation tree from a flat settings list.
///
/// Only `showInMenu` settings take part. A node whose parent is not among
/// them (hidden, disabled or missing) is promoted to the top level, and so
/// is any node caught in a parent cycle. The synthetic Home node always
/// comes first.
pub fn build_menu_tree(settings: &[PageSetting]) -> Vec<MenuNode> {
  let visible: Vec<&PageSetting> = settings.iter().filter(|s| s.settings.show_in_menu).collect();
  let known: HashSet<&str> = visible.iter().map(|s| s.id.as_str()).collect();

  let mut children_of: HashMap<&str, Vec<&PageSetting>> = HashMap::new();
  let mut roots = Vec::new();
  for setting in &visible {
    match setting.parent_id.as_deref() {
      Some(parent) if parent != setting.id && known.contains(parent) => {
        children_of.entry(parent).or_default().push(setting);
      }
      _ => roots.push(*setting),
    }
  }

  let mut placed = HashSet::new();
  let mut tree = vec![home_node()];
  for root in roots {
    tree.push(attach(root, &children_of, &mut placed));
  }

  // Parent chains that never reach a root form cycles; surface them at the top.
  for setting in &visible {
    if !placed.contains(setting.id.as_str()) {
      tree.push(attach(setting, &children_of, &mut placed));
    }
  }

  sort_level(&mut tree[1..]);
  tree
}

fn attach<'a>(
  setting: &'a PageSetting,
  children_of: &HashMap<&str, Vec<&'a PageSetting>>,
  placed: &mut HashSet<&'a str>,
) -> MenuNode {
  placed.insert(setting.id.as_str());
  let mut children = Vec::new();
  if let Some(kids) = children_of.get(setting.id.as_str()) {
    for kid in kids {
      if !placed.contains(kid.id.as_str()) {
        children.push(attach(kid, children_of, placed));
      }
    }
  }
  MenuNode {
    id: Some(setting.id.clone()),
    parent_id: setting.parent_id.clone(),
    order: setting.order,
    label: setting.label().to_string(),
    route: setting.route.clone(),
    external: false,
    children,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn settings(value: serde_json::Value) -> Vec<PageSetting> {
    serde_json::from_value(value).unwrap()
  }

  fn ids(nodes: &[MenuNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.id.as_deref().unwrap_or("home")).collect()
  }

  #[test]
  fn orders_levels_and_nests_children() {
    let list = settings(json!([
      {"id": "a", "pageType": "a", "route": "/a", "order": 2, "parentId": null, "settings": {"showInMenu": true}},
      {"id": "b", "pageType": "b", "route": "/b", "order": 1, "parentId": null, "settings": {"showInMenu": true}},
      {"id": "c", "pageType": "c", "route": "/c", "order": 0, "parentId": "a", "settings": {"showInMenu": true}}
    ]));
    let tree = build_menu_tree(&list);
    assert_eq!(ids(&tree), ["home", "b", "a"]);
    assert_eq!(tree[0].label, "Home");
    assert_eq!(tree[0].order, -1.0);
    assert_eq!(ids(&tree[2].children), ["c"]);
  }

  #[test]
  fn home_first_even_with_negative_orders() {
    let list = settings(json!([
      {"id": "x", "pageType": "x", "route": "/x", "order": -5, "settings": {"showInMenu": true}}
    ]));
    assert_eq!(ids(&build_menu_tree(&list)), ["home", "x"]);
  }

  #[test]
  fn hidden_parent_promotes_child() {
    let list = settings(json!([
      {"id": "p", "pageType": "p", "route": "/p", "order": 0, "settings": {"showInMenu": false}},
      {"id": "k", "pageType": "k", "route": "/p/k", "order": 0, "parentId": "p", "settings": {"showInMenu": true}}
    ]));
    let tree = build_menu_tree(&list);
    assert_eq!(ids(&tree), ["home", "k"]);
    assert!(tree[1].children.is_empty());
  }

  #[test]
  fn label_prefers_meta_title() {
    let list = settings(json!([
      {"id": "t", "pageType": "testimonial", "route": "/reviews", "settings": {"showInMenu": true, "metaTitle": "Reviews"}},
      {"id": "u", "pageType": "about", "route": "/about", "order": 1, "settings": {"showInMenu": true}}
    ]));
    let tree = build_menu_tree(&list);
    assert_eq!(tree[1].label, "Reviews");
    assert_eq!(tree[2].label, "about");
  }

  #[test]
  fn cycles_do_not_lose_nodes() {
    let list = settings(json!([
      {"id": "a", "pageType": "a", "route": "/a", "order": 1, "parentId": "b", "settings": {"showInMenu": true}},
      {"id": "b", "pageType": "b", "route": "/b", "order": 0, "parentId": "a", "settings": {"showInMenu": true}}
    ]));
    let tree = build_menu_tree(&list);
    let top: usize = tree.len() - 1;
    let nested: usize = tree.iter().map(|n| n.children.len()).sum();
    assert_eq!(top + nested, 2);
  }

  #[test]
  fn fractional_placement() {
    assert_eq!(placement_order(Placement::Before, 2.0), 1.5);
    assert_eq!(placement_order(Placement::After, 2.0), 2.5);
    let list = settings(json!([
      {"id": "a", "pageType": "a", "route": "/a", "order": 1, "settings": {"showInMenu": true}},
      {"id": "b", "pageType": "b", "route": "/b", "order": 2, "settings": {"showInMenu": true}},
      {"id": "n", "pageType": "n", "route": "/n", "order": placement_order(Placement::Before, 2.0), "settings": {"showInMenu": true}}
    ]));
    assert_eq!(ids(&build_menu_tree(&list)), ["home", "a", "n", "b"]);
  }
}
