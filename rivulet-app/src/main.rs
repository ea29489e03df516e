use anyhow::Context;
use rivulet::prelude::*;

/// Headless node-ID inspection tool: fetches the river-centerline tile
/// covering a coordinate and prints every identified node.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let center = parse_args()?;
    let loader = NodeTileLoader::new(UrlTemplateSource::gsi_river_centerline());
    let layer = NodeLayer::new(Arc::new(loader));

    let coord = TileCoord::from_lat_lng(&center, layer.tile_zoom());
    log::info!(
        "loading tile {}/{}/{} for lat {} lng {}",
        coord.z,
        coord.x,
        coord.y,
        center.lat,
        center.lng
    );

    let nodes = layer
        .load_around(&center)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    println!(
        "tile {}/{}/{}: {} nodes",
        coord.z,
        coord.x,
        coord.y,
        nodes.len()
    );
    for node in nodes.iter() {
        println!(
            "{:>16}  {:<12} {:<4} lat {:<12.7} lng {:<12.7}",
            node.node_id,
            node.properties.kind,
            node.properties.river_category,
            node.position.lat,
            node.position.lng
        );
    }

    let index = NodeIndex::new(Arc::clone(&nodes));
    if let Some((node, meters)) = index.nearest_with_distance(&center) {
        println!("\nnearest node ({:.1} m from center):", meters);
        println!("{}", node.tooltip());
    }

    Ok(())
}

/// Accepts an optional `LAT LNG` pair; defaults to the sample camera.
fn parse_args() -> anyhow::Result<LatLng> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            let (lat, lng) = DEFAULT_CENTER;
            Ok(LatLng::new(lat, lng))
        }
        [lat, lng] => {
            let lat: f64 = lat.parse().context("invalid latitude")?;
            let lng: f64 = lng.parse().context("invalid longitude")?;
            let center = LatLng::new(lat, lng);
            anyhow::ensure!(
                center.is_valid(),
                "coordinates out of range: lat {} lng {}",
                lat,
                lng
            );
            Ok(center)
        }
        _ => anyhow::bail!("usage: rivulet-app [LAT LNG]"),
    }
}
