//! Inkline CLI - silhouette adjacency inspection tool.
//!
//! Usage: inkline <COMMAND> [OPTIONS] <INPUT>
//!
//! Run `inkline --help` for available commands.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::{Point3, Vector3};

use inkline::adjacency::{AdjacencyOptions, EdgeRegistry, NonManifoldPolicy};
use inkline::mesh::Mesh;

#[derive(Parser)]
#[command(name = "inkline")]
#[command(author, version, about = "Silhouette adjacency CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh topology and adjacency information
    Info {
        /// Input OBJ file
        input: PathBuf,
    },

    /// Build adjacency index buffers and write them as little-endian u32
    Adjacency {
        /// Input OBJ file
        input: PathBuf,

        /// Output file (raw index buffer, ready for GPU upload)
        #[arg(short, long)]
        output: PathBuf,

        /// How to treat triangle lists that repeat a directed edge
        #[arg(long, value_enum, default_value = "reject")]
        non_manifold: NonManifoldArg,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum NonManifoldArg {
    /// Fail on repeated directed edges
    Reject,
    /// Keep the half-edge registered last for a repeated directed edge
    KeepLast,
}

impl From<NonManifoldArg> for NonManifoldPolicy {
    fn from(arg: NonManifoldArg) -> Self {
        match arg {
            NonManifoldArg::Reject => NonManifoldPolicy::Reject,
            NonManifoldArg::KeepLast => NonManifoldPolicy::KeepLast,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => {
            cmd_info(&input)?;
        }

        Commands::Adjacency {
            input,
            output,
            non_manifold,
        } => {
            cmd_adjacency(&input, &output, non_manifold.into())?;
        }
    }

    Ok(())
}

/// Import an OBJ file into inkline meshes.
///
/// Format parsing is delegated to tobj; this only reshapes its flat
/// attribute arrays.
fn load_meshes(input: &Path) -> Result<Vec<(String, Mesh)>, Box<dyn std::error::Error>> {
    let (models, _materials) = tobj::load_obj(input, &tobj::GPU_LOAD_OPTIONS)?;

    let mut meshes = Vec::with_capacity(models.len());
    for model in models {
        let positions: Vec<Point3<f32>> = model
            .mesh
            .positions
            .chunks_exact(3)
            .map(|p| Point3::new(p[0], p[1], p[2]))
            .collect();
        let normals: Vec<Vector3<f32>> = model
            .mesh
            .normals
            .chunks_exact(3)
            .map(|n| Vector3::new(n[0], n[1], n[2]))
            .collect();

        let mut mesh = Mesh::new(positions, normals, model.mesh.indices)?;
        if mesh.normals().is_empty() {
            mesh.compute_vertex_normals();
        }
        meshes.push((model.name, mesh));
    }

    Ok(meshes)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let meshes = load_meshes(input)?;

    println!("File: {}", input.display());
    println!("Meshes: {}", meshes.len());

    for (name, mesh) in &meshes {
        println!();
        println!("Mesh: {}", if name.is_empty() { "(unnamed)" } else { name });
        println!("Vertices: {}", mesh.vertex_count());
        println!("Triangles: {}", mesh.triangle_count());

        let start = Instant::now();
        let registry =
            EdgeRegistry::build(mesh.topology(), mesh.vertex_count(), NonManifoldPolicy::Reject);
        let elapsed = start.elapsed();

        match registry {
            Ok(registry) => {
                println!("Half-edges: {}", registry.len());
                println!("Boundary edges: {}", registry.boundary_edge_count());
                println!(
                    "Topology: {}",
                    if registry.is_closed() { "closed" } else { "open" }
                );
                println!("Registry build: {:.3} ms", elapsed.as_secs_f64() * 1e3);
            }
            Err(e) => {
                println!("Topology: non-manifold ({})", e);
            }
        }

        if let Some((min, max)) = mesh.bounding_box() {
            println!(
                "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
                min.x, min.y, min.z, max.x, max.y, max.z
            );
        }
    }

    Ok(())
}

fn cmd_adjacency(
    input: &Path,
    output: &Path,
    policy: NonManifoldPolicy,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut meshes = load_meshes(input)?;
    let options = AdjacencyOptions {
        non_manifold: policy,
    };

    let start = Instant::now();
    for (_, mesh) in &mut meshes {
        mesh.ensure_adjacency(&options)?;
    }
    let elapsed = start.elapsed();

    let mut writer = BufWriter::new(File::create(output)?);
    let mut total = 0usize;
    for (_, mesh) in &meshes {
        if let Some(adjacency) = mesh.adjacency() {
            for &index in adjacency.as_slice() {
                writer.write_all(&index.to_le_bytes())?;
            }
            total += adjacency.len();
        }
    }
    writer.flush()?;

    println!("Wrote {} indices to {}", total, output.display());
    println!("Adjacency build: {:.3} ms", elapsed.as_secs_f64() * 1e3);

    Ok(())
}
