mod data_loading;
mod heuristics;
mod roadmap;
mod search;

use heuristics::{TableDifference, TriangleBound};
use roadmap::RoadMap;
use search::SearchResult;

fn main() {
    env_logger::init();

    let roads = match data_loading::load_roads("data/romania_roads.csv") {
        Ok(roads) => roads,
        Err(error) => {
            eprintln!("Error loading road data: {}", error);
            std::process::exit(1);
        }
    };
    let table = match data_loading::load_distance_table("data/straight_line_to_bucharest.csv") {
        Ok(table) => table,
        Err(error) => {
            eprintln!("Error loading distance table: {}", error);
            std::process::exit(1);
        }
    };

    let mut romania = RoadMap::new();
    for road in &roads {
        romania.add_road(&road.from, &road.to, road.distance);
    }

    println!("Romania road map:");
    romania.print_map();

    report("Breadth-first search", &romania.bfs("Arad", "Bucharest"));
    report("Depth-first search", &romania.dfs("Arad", "Bucharest"));

    let table_difference = TableDifference::new(&table);
    let triangle_bound = TriangleBound::new(&table, &romania);
    report(
        "Best-first search (table difference)",
        &romania.best_first("Arad", "Bucharest", &table_difference),
    );
    report(
        "Best-first search (triangle bound)",
        &romania.best_first("Arad", "Bucharest", &triangle_bound),
    );
    report(
        "A* search (table difference)",
        &romania.a_star("Arad", "Bucharest", &table_difference),
    );
    report(
        "A* search (triangle bound)",
        &romania.a_star("Arad", "Bucharest", &triangle_bound),
    );
}

fn report(name: &str, result: &SearchResult) {
    println!("\n{}:", name);
    for (city, distance) in &result.trace {
        println!("  {} (distance {})", city, distance);
    }
    match result.total_distance {
        Some(total) => println!("  Total distance: {}", total),
        None => println!("  No path found"),
    }
}
