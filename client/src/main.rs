use todo_client::TodoApi;

fn main() {
    let base_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let api = TodoApi::new(&base_url);

    match api.list() {
        Ok(todos) if todos.is_empty() => println!("no todos yet"),
        Ok(todos) => {
            for todo in todos {
                let mark = if todo.status { 'x' } else { ' ' };
                println!("[{mark}] {}: {}", todo.name, todo.description);
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
