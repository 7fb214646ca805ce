#![allow(dead_code)]

pub mod spec_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Spec written to a temp file whose name ends in `suffix`; removed on drop
    pub fn named(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("swaggerize_")
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    pub fn yaml(content: &str) -> NamedTempFile {
        named(content, ".yaml")
    }

    pub fn json(content: &str) -> NamedTempFile {
        named(content, ".json")
    }
}

pub mod mock_http {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one request with `status_line` and `body`, returning the URL to fetch
    pub fn serve_once(status_line: &'static str, body: String, file: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let url = format!("http://{}:{}/{}", addr.ip(), addr.port(), file);
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let resp = format!(
                    "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(resp.as_bytes());
            }
        });
        url
    }

    pub fn serve_ok(body: &str, file: &str) -> String {
        serve_once("200 OK", body.to_string(), file)
    }

    pub fn serve_not_found(file: &str) -> String {
        serve_once("404 Not Found", "not found".to_string(), file)
    }
}

pub mod fixtures {
    /// Petstore with a nested model chain, a shared parameter and a cycle
    pub const PETSTORE_YAML: &str = r##"swagger: "2.0"
info:
  title: Petstore
  version: "1.0"
basePath: /v1
paths:
  /pets:
    get:
      operationId: listPets
      responses:
        "200":
          description: pets
          schema:
            type: array
            items:
              $ref: "#/definitions/Pet"
        "404":
          description: missing
          schema:
            $ref: "#/definitions/NotFound"
    post:
      operationId: createPet
      parameters:
        - $ref: "#/parameters/PetBody"
      responses:
        default:
          description: error
          schema:
            $ref: "#/definitions/Error"
  /pets/{petId}:
    get:
      operationId: showPet
      parameters:
        - name: petId
          in: path
          required: true
          type: string
      responses:
        "200":
          description: pet
          schema:
            $ref: "#/definitions/Pet"
  /stores/{storeId}/owners:
    put:
      operationId: replaceOwners
      parameters:
        - name: storeId
          in: path
          required: true
          type: string
      responses:
        "204":
          description: replaced
parameters:
  PetBody:
    name: body
    in: body
    required: true
    schema:
      $ref: "#/definitions/NewPet"
definitions:
  Pet:
    type: object
    properties:
      owner:
        $ref: "#/definitions/Owner"
      tags:
        type: array
        items:
          $ref: "#/definitions/Tag"
  Owner:
    type: object
    properties:
      pets:
        type: array
        items:
          $ref: "#/definitions/Pet"
  Tag:
    type: object
  NewPet:
    type: object
  Error:
    type: object
  NotFound:
    type: object
  Unused:
    type: object
"##;
}
