use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Deserialize)]
struct OverpassResponse {
    elements: Vec<OverpassElement>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum OverpassElement {
    Node {
        id: i64,
        lat: f64,
        lon: f64,
    },
    Way {
        id: i64,
        #[serde(default)]
        nodes: Vec<i64>,
    },
    Relation {
        id: i64,
        #[serde(default)]
        tags: HashMap<String, String>,
        #[serde(default)]
        members: Vec<OverpassMember>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct OverpassMember {
    #[serde(rename = "type")]
    member_type: String,
    #[serde(rename = "ref")]
    reference: i64,
    #[serde(default)]
    role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RelationMember {
    OuterMember(i64),
    InnerMember(i64),
}

impl RelationMember {
    pub fn outer_id(&self) -> Option<i64> {
        match self {
            RelationMember::OuterMember(id) => Some(*id),
            RelationMember::InnerMember(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationWithMembers {
    pub id: i64,
    pub tags: HashMap<String, String>,
    pub members: Vec<RelationMember>,
}

/// Raw element tables of one Overpass response: relations in response
/// order, way node-id lists and node `(lon, lat)` coordinates keyed by id.
pub type OverpassElements = (
    Vec<RelationWithMembers>,
    HashMap<i64, Vec<i64>>,
    HashMap<i64, (f64, f64)>,
);

pub fn read_overpass_elements(payload: &str) -> Result<OverpassElements> {
    let response: OverpassResponse =
        serde_json::from_str(payload).context("decoding Overpass response")?;

    let mut relations = Vec::<RelationWithMembers>::new();
    let mut ways = HashMap::<i64, Vec<i64>>::new();
    let mut nodes = HashMap::<i64, (f64, f64)>::new();

    for element in response.elements {
        match element {
            OverpassElement::Node { id, lat, lon } => {
                nodes.insert(id, (lon, lat));
            }
            OverpassElement::Way { id, nodes: node_ids } => {
                ways.insert(id, node_ids);
            }
            OverpassElement::Relation { id, tags, members } => {
                relations.push(RelationWithMembers {
                    id,
                    tags,
                    members: read_members(members),
                });
            }
            OverpassElement::Other => {}
        }
    }

    Ok((relations, ways, nodes))
}

// Only way members count; a missing role is treated as outer.
fn read_members(members: Vec<OverpassMember>) -> Vec<RelationMember> {
    members
        .into_iter()
        .filter(|member| member.member_type == "way")
        .filter_map(|member| match member.role.as_str() {
            "outer" | "" => Some(RelationMember::OuterMember(member.reference)),
            "inner" => Some(RelationMember::InnerMember(member.reference)),
            _ => None,
        })
        .collect()
}
