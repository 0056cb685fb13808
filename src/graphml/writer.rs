//! GraphML document writer.
//!
//! Renders a [`WordGraph`] with a [`StyleConfig`] into a complete GraphML
//! document for yEd. The schema contract is centralized here: one builder
//! function per schema fragment (node visual block, edge visual block), so
//! the document structure can be verified in one place.
//!
//! Output is deterministic: identical graph and style input produces
//! byte-identical documents across runs.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{LyricgraphError, Result};
use crate::graph::builder::{WordEdge, WordGraph, WordNode};
use crate::style::{EdgeStyle, NodeStyle, StyleConfig};

/// Base GraphML schema namespace (default namespace of the document).
pub const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";

/// yWorks visual-extension namespace, bound to the `y` prefix.
pub const YWORKS_NS: &str = "http://www.yworks.com/xml/graphml";

/// Key id under which node visual data is attached.
const NODE_KEY_ID: &str = "d6";

/// Key id under which edge visual data is attached.
const EDGE_KEY_ID: &str = "d9";

/// Serialize the graph into a GraphML document string.
///
/// # Examples
///
/// ```
/// use lyricgraph::graph::builder::{WordGraph, WordNode};
/// use lyricgraph::graphml::write_graphml;
/// use lyricgraph::style::StyleConfig;
///
/// let graph = WordGraph {
///     nodes: vec![WordNode { word: "echo".to_string(), frequency: 1 }],
///     edges: vec![],
/// };
/// let document = write_graphml(&graph, &StyleConfig::default()).unwrap();
///
/// assert!(document.contains("<node id=\"echo\">"));
/// ```
pub fn write_graphml(graph: &WordGraph, style: &StyleConfig) -> Result<String> {
    let bytes =
        emit_document(graph, style).map_err(|e| LyricgraphError::serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| LyricgraphError::serialization(e.to_string()))
}

/// Emit the full document: declaration, root, key declarations, graph body.
fn emit_document(graph: &WordGraph, style: &StyleConfig) -> quick_xml::Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("graphml");
    root.push_attribute(("xmlns", GRAPHML_NS));
    root.push_attribute(("xmlns:y", YWORKS_NS));
    writer.write_event(Event::Start(root))?;

    write_key(&mut writer, "node", NODE_KEY_ID, "nodegraphics")?;
    write_key(&mut writer, "edge", EDGE_KEY_ID, "edgegraphics")?;

    let mut graph_elem = BytesStart::new("graph");
    graph_elem.push_attribute(("id", "G"));
    graph_elem.push_attribute(("edgedefault", "directed"));

    if graph.is_empty() {
        writer.write_event(Event::Empty(graph_elem))?;
    } else {
        writer.write_event(Event::Start(graph_elem))?;

        for node in &graph.nodes {
            write_node(&mut writer, node, &style.node)?;
        }
        for (index, edge) in graph.edges.iter().enumerate() {
            write_edge(&mut writer, index, edge, &style.edge)?;
        }

        writer.write_event(Event::End(BytesEnd::new("graph")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("graphml")))?;

    Ok(writer.into_inner())
}

/// Emit one schema-key declaration requesting yFiles visual data.
fn write_key(
    writer: &mut Writer<Vec<u8>>,
    target: &str,
    id: &str,
    yfiles_type: &str,
) -> quick_xml::Result<()> {
    let mut key = BytesStart::new("key");
    key.push_attribute(("for", target));
    key.push_attribute(("id", id));
    key.push_attribute(("yfiles.type", yfiles_type));
    writer.write_event(Event::Empty(key))
}

/// Emit one node element with its visual data block.
fn write_node(
    writer: &mut Writer<Vec<u8>>,
    node: &WordNode,
    style: &NodeStyle,
) -> quick_xml::Result<()> {
    let mut elem = BytesStart::new("node");
    elem.push_attribute(("id", node.word.as_str()));
    writer.write_event(Event::Start(elem))?;

    let mut data = BytesStart::new("data");
    data.push_attribute(("key", NODE_KEY_ID));
    writer.write_event(Event::Start(data))?;

    writer.write_event(Event::Start(BytesStart::new("y:ShapeNode")))?;

    let diameter = style.diameter(node.frequency).to_string();
    let mut geometry = BytesStart::new("y:Geometry");
    geometry.push_attribute(("width", diameter.as_str()));
    geometry.push_attribute(("height", diameter.as_str()));
    writer.write_event(Event::Empty(geometry))?;

    let mut shape = BytesStart::new("y:Shape");
    shape.push_attribute(("type", "ellipse"));
    writer.write_event(Event::Empty(shape))?;

    let mut fill = BytesStart::new("y:Fill");
    fill.push_attribute(("color", style.fill_color.as_str()));
    fill.push_attribute(("transparent", "false"));
    writer.write_event(Event::Empty(fill))?;

    let border_width = style.border_width.to_string();
    let mut border = BytesStart::new("y:BorderStyle");
    border.push_attribute(("type", "line"));
    border.push_attribute(("color", style.border_color.as_str()));
    border.push_attribute(("width", border_width.as_str()));
    writer.write_event(Event::Empty(border))?;

    let font_size = style.font_size(node.frequency).to_string();
    let mut label = BytesStart::new("y:NodeLabel");
    label.push_attribute(("fontSize", font_size.as_str()));
    label.push_attribute(("fontFamily", style.label.font_family.as_str()));
    label.push_attribute(("textColor", style.label.text_color.as_str()));
    writer.write_event(Event::Start(label))?;
    writer.write_event(Event::Text(BytesText::new(&node.word)))?;
    writer.write_event(Event::End(BytesEnd::new("y:NodeLabel")))?;

    writer.write_event(Event::End(BytesEnd::new("y:ShapeNode")))?;
    writer.write_event(Event::End(BytesEnd::new("data")))?;
    writer.write_event(Event::End(BytesEnd::new("node")))
}

/// Emit one edge element with its visual data block.
///
/// The edge id is positional: `e0, e1, ...` in transition order.
fn write_edge(
    writer: &mut Writer<Vec<u8>>,
    index: usize,
    edge: &WordEdge,
    style: &EdgeStyle,
) -> quick_xml::Result<()> {
    let id = format!("e{index}");
    let mut elem = BytesStart::new("edge");
    elem.push_attribute(("id", id.as_str()));
    elem.push_attribute(("source", edge.source.as_str()));
    elem.push_attribute(("target", edge.target.as_str()));
    writer.write_event(Event::Start(elem))?;

    let mut data = BytesStart::new("data");
    data.push_attribute(("key", EDGE_KEY_ID));
    writer.write_event(Event::Start(data))?;

    writer.write_event(Event::Start(BytesStart::new("y:PolyLineEdge")))?;

    let width = style.width.to_string();
    let mut line = BytesStart::new("y:LineStyle");
    line.push_attribute(("type", "line"));
    line.push_attribute(("color", style.color.as_str()));
    line.push_attribute(("width", width.as_str()));
    writer.write_event(Event::Empty(line))?;

    writer.write_event(Event::End(BytesEnd::new("y:PolyLineEdge")))?;
    writer.write_event(Event::End(BytesEnd::new("data")))?;
    writer.write_event(Event::End(BytesEnd::new("edge")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> WordGraph {
        WordGraph {
            nodes: vec![
                WordNode {
                    word: "hello".to_string(),
                    frequency: 2,
                },
                WordNode {
                    word: "world".to_string(),
                    frequency: 1,
                },
            ],
            edges: vec![
                WordEdge {
                    source: "hello".to_string(),
                    target: "hello".to_string(),
                },
                WordEdge {
                    source: "hello".to_string(),
                    target: "world".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_document_skeleton() {
        let document = write_graphml(&sample_graph(), &StyleConfig::default()).unwrap();

        assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(document.contains(
            "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\" \
             xmlns:y=\"http://www.yworks.com/xml/graphml\">"
        ));
        assert!(document.contains("<key for=\"node\" id=\"d6\" yfiles.type=\"nodegraphics\"/>"));
        assert!(document.contains("<key for=\"edge\" id=\"d9\" yfiles.type=\"edgegraphics\"/>"));
        assert!(document.contains("<graph id=\"G\" edgedefault=\"directed\">"));
        assert!(document.ends_with("</graphml>"));
    }

    #[test]
    fn test_node_visual_block() {
        let document = write_graphml(&sample_graph(), &StyleConfig::default()).unwrap();

        // frequency 2: diameter 50 * sqrt(2), font floor(diameter / 5)
        assert!(document.contains("<node id=\"hello\">"));
        assert!(document.contains(
            "<y:Geometry width=\"70.71067811865476\" height=\"70.71067811865476\"/>"
        ));
        assert!(document.contains("<y:Shape type=\"ellipse\"/>"));
        assert!(document.contains("<y:Fill color=\"#FFCC00\" transparent=\"false\"/>"));
        assert!(document.contains("<y:BorderStyle type=\"line\" color=\"#FF9900\" width=\"1\"/>"));
        assert!(document.contains(
            "<y:NodeLabel fontSize=\"14\" fontFamily=\"Source Sans Pro Semibold\" \
             textColor=\"#993300\">hello</y:NodeLabel>"
        ));

        // frequency 1: base diameter, font 10
        assert!(document.contains("<node id=\"world\">"));
        assert!(document.contains("<y:Geometry width=\"50\" height=\"50\"/>"));
        assert!(document.contains(
            "<y:NodeLabel fontSize=\"10\" fontFamily=\"Source Sans Pro Semibold\" \
             textColor=\"#993300\">world</y:NodeLabel>"
        ));
    }

    #[test]
    fn test_edge_visual_block() {
        let document = write_graphml(&sample_graph(), &StyleConfig::default()).unwrap();

        assert!(document.contains("<edge id=\"e0\" source=\"hello\" target=\"hello\">"));
        assert!(document.contains("<edge id=\"e1\" source=\"hello\" target=\"world\">"));
        assert!(document.contains("<y:LineStyle type=\"line\" color=\"#333333\" width=\"1\"/>"));
    }

    #[test]
    fn test_empty_graph_document() {
        let document = write_graphml(&WordGraph::default(), &StyleConfig::default()).unwrap();

        // Key declarations survive; the graph element is present but empty
        assert!(document.contains("<key for=\"node\" id=\"d6\" yfiles.type=\"nodegraphics\"/>"));
        assert!(document.contains("<key for=\"edge\" id=\"d9\" yfiles.type=\"edgegraphics\"/>"));
        assert!(document.contains("<graph id=\"G\" edgedefault=\"directed\"/>"));
        assert!(!document.contains("<node"));
        assert!(!document.contains("<edge"));
    }

    #[test]
    fn test_deterministic_output() {
        let graph = sample_graph();
        let style = StyleConfig::default();

        let first = write_graphml(&graph, &style).unwrap();
        let second = write_graphml(&graph, &style).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_alternate_style_config() {
        let mut style = StyleConfig::default();
        style.node.base_diameter = 10.0;
        style.edge.color = "#000000".to_string();

        let document = write_graphml(&sample_graph(), &style).unwrap();

        assert!(document.contains("<y:Geometry width=\"10\" height=\"10\"/>"));
        assert!(document.contains("<y:LineStyle type=\"line\" color=\"#000000\" width=\"1\"/>"));
    }

    #[test]
    fn test_apostrophe_word_is_escaped_safely() {
        let graph = WordGraph {
            nodes: vec![WordNode {
                word: "don't".to_string(),
                frequency: 1,
            }],
            edges: vec![],
        };

        let document = write_graphml(&graph, &StyleConfig::default()).unwrap();

        // quick-xml escapes attribute values; the label text carries the word
        assert!(document.contains(">don&apos;t</y:NodeLabel>") || document.contains(">don't</y:NodeLabel>"));
    }
}
