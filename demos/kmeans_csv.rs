//! runs k-means on a csv file of integer coordinates, one point by line.
//!
//! usage : kmeans_csv --file data.csv --k 5 [--seed 1234] [--max-iter 100] [--out clusters.csv]
//!
//! Cluster sizes and cost are printed. With --out, each point is dumped with its label.

use clap::{Arg, ArgAction, Command};

use cpu_time::ProcessTime;
use std::path::PathBuf;
use std::time::SystemTime;

use lloydcluster::io::csvio::*;
use lloydcluster::kmeans::*;

pub fn main() {
    //
    let _ = env_logger::builder().try_init();
    //
    let matches = Command::new("kmeans_csv")
        .arg(
            Arg::new("file")
                .long("file")
                .required(true)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .help("csv file of points"),
        )
        .arg(
            Arg::new("k")
                .long("k")
                .required(true)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("number of clusters"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .required(false)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(u64))
                .help("seed for initial centers draw"),
        )
        .arg(
            Arg::new("max_iter")
                .long("max-iter")
                .required(false)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("maximum number of iterations, unbounded by default"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .required(false)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .help("csv file to dump clusters"),
        )
        .get_matches();
    //
    let fname = matches.get_one::<PathBuf>("file").unwrap();
    let k = *matches.get_one::<usize>("k").unwrap();
    let mut params = KmeansParams::new(k);
    if let Some(seed) = matches.get_one::<u64>("seed") {
        params = params.with_seed(*seed);
    }
    if let Some(max_iter) = matches.get_one::<usize>("max_iter") {
        params = params.with_max_iter(*max_iter);
    }
    //
    let points = match load_csv_points::<f64, _>(fname) {
        Ok(points) => points,
        Err(e) => {
            log::error!("error reading {:?} : {:?}", fname, e);
            std::process::exit(1);
        }
    };
    //
    let sys_now = SystemTime::now();
    let cpu_start = ProcessTime::now();
    let clustering = match k_means(&points, &params) {
        Ok(clustering) => clustering,
        Err(e) => {
            log::error!("k_means failed : {:?}", e);
            std::process::exit(1);
        }
    };
    println!(
        " clustering sys time(ms) {:?} cpu time(ms) {:?}",
        sys_now.elapsed().unwrap().as_millis(),
        cpu_start.elapsed().as_millis()
    );
    //
    println!(
        "nb clusters : {}, nb iterations : {}",
        clustering.get_nb_cluster(),
        clustering.get_nb_iter()
    );
    for (label, group) in clustering.get_groups() {
        println!("label : {}, size : {}", label, group.len());
    }
    match clustering.cost() {
        Some(cost) => println!("cost : {:.3e}", cost),
        None => println!("cost : undefined"),
    }
    //
    if let Some(out) = matches.get_one::<PathBuf>("out") {
        if let Err(e) = dump_clustering_csv(&clustering, out) {
            log::error!("could not dump clusters : {:?}", e);
            std::process::exit(1);
        }
    }
} // end of main
