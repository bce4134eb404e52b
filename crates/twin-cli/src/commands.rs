use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use twin_gateway::{ChillerConnection, DeviceGateway, FixedGateway, GatewayConfig};
use twin_resolve::{PathSegment, ValueResolver};
use twin_store::Store;
use twin_types::{
    ElementCollection, EntityKind, Identifier, Property, ScalarValue, Shell, Submodel,
    SubmodelElement,
};

use crate::cli::{Cli, Command, GetArgs, ListArgs, ResolveArgs};

/// The runtime submodel is never stored; a whole-entity get synthesizes it
/// from a live device reading.
const CHILLER_RUNTIME_ID: &str = "urn:zhaw:chiller_runtime";

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = Arc::new(demo_store()?);
    match cli.command {
        Command::List(args) => cmd_list(&store, args),
        Command::Get(args) => cmd_get(&store, args, cli.simulate, cli.config.as_deref()),
        Command::Resolve(args) => {
            cmd_resolve(&store, args, cli.simulate, cli.config.as_deref())
        }
    }
}

/// Seed the bench demo data: the static chiller submodel and its shell.
fn demo_store() -> anyhow::Result<Store> {
    let store = Store::new();

    store.put_submodel(
        Submodel::new(Identifier::new("urn:zhaw:chiller_static")?, "chiller_static")
            .with_elements(vec![
                SubmodelElement::Property(Property::new("max_power", ScalarValue::Float(5000.0))),
                SubmodelElement::Collection(ElementCollection::new(
                    "operating_conditions",
                    vec![
                        SubmodelElement::Property(Property::new(
                            "temperature",
                            ScalarValue::Float(276.15),
                        )),
                        SubmodelElement::Property(Property::new(
                            "unit",
                            ScalarValue::Str("K".into()),
                        )),
                    ],
                )),
            ]),
    );

    let mut shell = Shell::new(Identifier::new("urn:zhaw:chiller")?, "chiller");
    shell.submodel_refs = vec![
        "urn:zhaw:chiller_static".into(),
        "urn:zhaw:chiller_runtime".into(),
    ];
    store.put_shell(shell);

    Ok(store)
}

fn cmd_list(store: &Arc<Store>, args: ListArgs) -> anyhow::Result<()> {
    let kind = args.kind.into();
    let ids = store.list(kind);
    println!("{} {kind}", ids.len().to_string().bold());
    for id in ids {
        println!("  {}", id.to_string().yellow());
    }
    Ok(())
}

fn cmd_get(
    store: &Arc<Store>,
    args: GetArgs,
    simulate: bool,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let identifier: Identifier = args.identifier.parse()?;
    let kind: EntityKind = args.kind.into();
    if let Some(entity) = store.get(kind, &identifier) {
        println!("{}", serde_json::to_string_pretty(&entity)?);
        return Ok(());
    }
    if kind == EntityKind::Submodel && identifier.as_str() == CHILLER_RUNTIME_ID {
        let gateway = open_gateway(simulate, config_path)?;
        let submodel = live_runtime_submodel(&identifier, gateway.as_ref())?;
        println!("{}", serde_json::to_string_pretty(&submodel)?);
        return Ok(());
    }
    anyhow::bail!("no entity {identifier} in {kind}")
}

/// Build the runtime submodel on the fly: one `temperature` property holding
/// the current device reading.
fn live_runtime_submodel(
    identifier: &Identifier,
    gateway: &dyn DeviceGateway,
) -> anyhow::Result<Submodel> {
    let reading = gateway.read_temperature()?;
    Ok(
        Submodel::new(identifier.clone(), "chiller_runtime").with_elements(vec![
            SubmodelElement::Property(Property::new("temperature", ScalarValue::Float(reading))),
        ]),
    )
}

fn cmd_resolve(
    store: &Arc<Store>,
    args: ResolveArgs,
    simulate: bool,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let path: Vec<PathSegment> = args.segments.iter().map(|s| parse_segment(s)).collect();
    let gateway = open_gateway(simulate, config_path)?;
    let resolver = ValueResolver::new(Arc::clone(store), gateway);
    let value = resolver.resolve(&path)?;
    println!(
        "{} {}",
        value.canonical_text().green().bold(),
        format!("({})", value.data_type()).dimmed(),
    );
    Ok(())
}

/// The device connection lives exactly as long as one command; drop releases
/// it on every exit path, errors included.
fn open_gateway(simulate: bool, config_path: Option<&Path>) -> anyhow::Result<Arc<dyn DeviceGateway>> {
    if simulate {
        Ok(Arc::new(FixedGateway::default()))
    } else {
        let config = load_gateway_config(config_path)?;
        Ok(Arc::new(ChillerConnection::connect(&config)?))
    }
}

fn load_gateway_config(path: Option<&Path>) -> anyhow::Result<GatewayConfig> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading gateway config {}", path.display()))?;
            toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(GatewayConfig::default()),
    }
}

fn parse_segment(raw: &str) -> PathSegment {
    raw.parse::<usize>()
        .map(PathSegment::Index)
        .unwrap_or_else(|_| PathSegment::name(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_submodel_is_synthesized_from_the_gateway() {
        let gateway = FixedGateway::new(198.4);
        let identifier = Identifier::new(CHILLER_RUNTIME_ID).unwrap();

        let submodel = live_runtime_submodel(&identifier, &gateway).unwrap();
        assert_eq!(submodel.id_short, "chiller_runtime");
        match &submodel.elements[..] {
            [SubmodelElement::Property(property)] => {
                assert_eq!(property.id_short, "temperature");
                assert_eq!(property.value, ScalarValue::Float(198.4));
            }
            other => panic!("unexpected elements: {other:?}"),
        }
        assert_eq!(gateway.read_count(), 1);
    }

    #[test]
    fn demo_store_does_not_persist_the_runtime_submodel() {
        // The runtime submodel exists only as a live reading.
        let store = demo_store().unwrap();
        let identifier = Identifier::new(CHILLER_RUNTIME_ID).unwrap();
        assert!(store.get_submodel(&identifier).is_none());
    }

    #[test]
    fn numeric_segments_parse_as_indices() {
        assert_eq!(parse_segment("3"), PathSegment::Index(3));
        assert_eq!(parse_segment("temperature"), PathSegment::name("temperature"));
    }
}
